// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod io;
pub mod metadata;
pub mod util;

use std::{io::Error as IoError, result::Result as StdResult};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found")]
    FileNotFound(String),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    pub use super::{Error, Result};
}
