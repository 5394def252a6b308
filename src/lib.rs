//! Workspace tooling package. It carries the pre-commit hook configuration
//! and no code; see `crates/klroute-lib` and `crates/klroute-cli`.
