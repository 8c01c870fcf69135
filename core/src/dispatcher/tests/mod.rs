//! Tests for the dispatcher and the generic send path
