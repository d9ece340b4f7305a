// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded from `assets/i18n/` at build time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Region fallback (`fr-CA` uses `fr` when only `fr` is shipped)
//! - Placeholder arguments via [`fluent::I18n::tr_with_args`]
//! - Missing keys render as `MISSING: <key>`

pub mod fluent;

pub use fluent::I18n;
