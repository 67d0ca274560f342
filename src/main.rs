// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Geodraw Edit: replay a scripted direct-select session

fn main() -> anyhow::Result<()> {
    geodraw_edit::run()
}
