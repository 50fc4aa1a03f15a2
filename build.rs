// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

fn main() {
    lalrpop::process_root().unwrap();
}
