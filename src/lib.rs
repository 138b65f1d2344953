// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub use scoremeta_core as core;
pub use scoremeta_pdf as pdf;
