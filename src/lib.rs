//! # Reclaim - Lost & Found Service Library
//!
//! This is a facade crate that re-exports all public APIs from the reclaim service components.
//! Use this crate to get access to the whole lost-and-found backend in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! reclaim = { path = "../reclaim" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Email`, `Password`, `User`, `Item`, etc.
//! - **Repository traits**: `UserStore`, `ItemStore`, `PasswordHasher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `CreateItemUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `PostgresItemStore`, `Argon2PasswordHasher`, etc.
//! - **Service**: `ReclaimService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use reclaim_core::*;
}

// Re-export most commonly used core types at the root level
pub use reclaim_core::{
    AuthenticatedUser, ContactInfo, Email, Item, ItemCategory, ItemError, ItemId, ItemResponse,
    ItemType, NewItem, Password, PasswordHash, User, UserError, UserId, Username,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use reclaim_core::{ItemStore, ItemStoreError, UserStore, UserStoreError};
}

// Re-export repository traits at root level
pub use reclaim_core::{
    ItemStore, ItemStoreError, PasswordHasher, PasswordHasherError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use reclaim_application::*;
}

// Re-export use cases at root level
pub use reclaim_application::{
    CreateItemUseCase, GetUserUseCase, ListItemsUseCase, LoginUseCase, RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use reclaim_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use reclaim_adapters::persistence::*;
    }

    /// Password hashing implementations
    pub mod hashing {
        pub use reclaim_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use reclaim_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use reclaim_adapters::{
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, PostgresItemStore, PostgresUserStore, VecItemStore},
};

// ============================================================================
// Reclaim Service (Main Entry Point)
// ============================================================================

/// Main HTTP service
pub use reclaim_service::{
    ReclaimService,
    helpers::{configure_postgresql, get_postgres_pool},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
