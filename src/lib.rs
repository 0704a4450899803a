//! tocgen - contents index generator for script collections
//!
//! tocgen collects the leading comment block of every `*.<ext>` file in a
//! directory and prints them, under a banner line, as one index document.
//! The defaults target MATLAB toolboxes (`*.m`, `%` comments, blocks end
//! before `SYNOPSIS`), so `tocgen > Contents.m` regenerates a toolbox index.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, diagnostics)
//! - `config`: Configuration defaults and config file loading
//! - `core`: Discovery, header extraction and index emission

pub mod cli;
pub mod config;
pub mod core;
