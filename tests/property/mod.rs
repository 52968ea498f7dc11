// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Property tests over the subnet service using proptest.

mod subnet_properties;
