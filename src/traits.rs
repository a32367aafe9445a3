// Value source seam
//
// The engine never parses a request itself; it asks the surrounding
// layer for one named input at a time.

use std::collections::HashMap;

/// Lookup of a named input from the ambient request or form data.
///
/// Returning `None` means the input was not supplied at all, which is
/// distinct from an empty string only for rules that care (`required`
/// treats both as missing).
pub trait ValueSource {
    /// Fetch the raw value for a field key
    fn get(&self, key: &str) -> Option<String>;
}

impl ValueSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<K, V> ValueSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref().to_string())
    }
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
