//! Integration tests for the assembled picker.
//!
//! Scenario tests drive a mounted [`ColorPicker`](crate::ColorPicker) with
//! pointer events; property tests cover the conversion and pointer math.

mod picker_scenarios;
