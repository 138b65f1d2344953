// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod music;
pub mod util;
