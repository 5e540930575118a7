//! End-to-end tests for `kc-admin-client` live under `tests/`.
