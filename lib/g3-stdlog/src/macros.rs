/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

macro_rules! impl_emit_number {
    ($(#[$m:meta])* $t:ty => $f:ident) => {
        $(#[$m])*
        fn $f(&mut self, key: slog::Key, val: $t) -> slog::Result {
            self.emit_value(key, serde_json::Value::from(val))
        }
    };
}
