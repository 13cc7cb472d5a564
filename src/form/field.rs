//! Field Definition protocol and deferred configuration values.

/// A cloneable form field descriptor
///
/// Identity is by the assigned name. The tab builder only clones fields and
/// renames the clones; a caller's original is never mutated.
pub trait FormField: Send + Sync {
    /// Get the field name
    fn name(&self) -> &str;

    /// Get the state-binding path
    fn state_path(&self) -> &str;

    /// Set the field name
    fn set_name(&mut self, name: String);

    /// Set the state-binding path
    fn set_state_path(&mut self, path: String);

    /// Clone into a boxed field
    fn boxed_clone(&self) -> Box<dyn FormField>;
}

impl Clone for Box<dyn FormField> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// A configuration value given directly or computed at build time
///
/// Lazy values are evaluated on every use, never at configuration time, so
/// field sets can depend on runtime context.
pub enum Deferred<T> {
    /// A fixed value
    Value(T),
    /// A closure evaluated on every build
    Lazy(Box<dyn Fn() -> T + Send + Sync>),
}

impl<T> Deferred<T> {
    /// Create a lazily evaluated value
    pub fn lazy(f: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Deferred::Lazy(Box::new(f))
    }
}

impl<T: Clone> Deferred<T> {
    /// Resolve the value, evaluating a lazy closure
    pub fn evaluate(&self) -> T {
        match self {
            Deferred::Value(value) => value.clone(),
            Deferred::Lazy(f) => f(),
        }
    }
}

impl<T> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Deferred::Value(value)
    }
}

impl<T> std::fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Deferred::Value(_) => f.write_str("Deferred::Value(..)"),
            Deferred::Lazy(_) => f.write_str("Deferred::Lazy(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_deferred_value() {
        let deferred = Deferred::from(vec![1, 2, 3]);
        assert_eq!(deferred.evaluate(), vec![1, 2, 3]);
    }

    #[test]
    fn test_deferred_lazy_evaluates_on_each_use() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let deferred = Deferred::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            vec!["a".to_string()]
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        deferred.evaluate();
        deferred.evaluate();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
