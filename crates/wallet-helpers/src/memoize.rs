//! Memoization keyed on an explicit string form of the argument list.
//!
//! The key is the argument count followed by each argument's fragment,
//! joined with `,`. Distinct values can share a fragment (every object maps
//! to `[object Object]`, and `[1,2]` reads the same as `"1,2"`), in which case
//! the later call is served the earlier call's result.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::trace;

/// String form of one argument inside a cache key.
pub fn key_fragment(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(key_fragment).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Cache key for a full argument list.
pub fn cache_key(args: &[Value]) -> String {
    let joined = args.iter().map(key_fragment).collect::<Vec<_>>().join(",");
    format!("{}{}", args.len(), joined)
}

/// A function wrapped with a private, unbounded result cache.
pub struct Memoized<F, R> {
    f: F,
    cache: Mutex<HashMap<String, R>>,
}

/// Wrap `f` so repeated calls with the same argument key reuse the first result.
pub fn memoize<F, R>(f: F) -> Memoized<F, R>
where
    F: Fn(&[Value]) -> R,
    R: Clone,
{
    Memoized {
        f,
        cache: Mutex::new(HashMap::new()),
    }
}

impl<F, R> Memoized<F, R>
where
    F: Fn(&[Value]) -> R,
    R: Clone,
{
    pub fn call(&self, args: &[Value]) -> R {
        let key = cache_key(args);
        if let Some(hit) = self.lock().get(&key) {
            return hit.clone();
        }

        trace!(key = %key, "memoize cache miss");
        // The lock is released while `f` runs so it may call back into `self`.
        let result = (self.f)(args);
        self.lock().insert(key, result.clone());
        result
    }

    /// Number of distinct argument keys cached so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, R>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
