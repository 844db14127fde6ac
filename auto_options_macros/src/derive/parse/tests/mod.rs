//! Unit tests for attribute and input parsing.

mod type_utils;
