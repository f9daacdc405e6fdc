//! `edgetools` is a small toolkit for reading and visualising plasma-edge
//! EIRENE simulation output
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use edgetools_utils as utils;

#[cfg(feature = "eirene")]
#[cfg_attr(docsrs, doc(cfg(feature = "eirene")))]
#[doc(inline)]
pub use edgetools_eirene as eirene;

#[cfg(feature = "plot")]
#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
#[doc(inline)]
pub use edgetools_plot as plot;
