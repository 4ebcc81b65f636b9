// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod helpers;
pub mod query_executor_test;
pub mod udp_transport_test;
pub mod worker_pool_test;
