// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Enough for most directive spellings (`|[#rrggbb` is 9 bytes) and SGR parameter lists.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Most style runs carry only a handful of SGR parameters.
pub const DEFAULT_LIST_STORAGE_SIZE: usize = 8;

pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

pub type InlineVec<T> = SmallVec<[T; DEFAULT_LIST_STORAGE_SIZE]>;
