//! Hashing collection aliases.
//!
//! FxHash is used for every internal map/set keyed by short strings or small
//! tuples; cryptographic resistance is not needed anywhere in the engine.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
