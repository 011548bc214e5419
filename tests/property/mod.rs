// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of the todo value objects and aggregate that must hold for
//! all inputs.

mod value_objects;
