//! The context, where functions and constants are registered.

use crate::consts;
use crate::funcs::Func;
use levenshtein::levenshtein;
use std::collections::HashMap;

/// A registry of the functions and constants visible to the tokenizer and parser.
///
/// A freshly created context is empty; [`Ctxt::init`] registers the built-in functions and the
/// constants `e` and `pi`. [`Ctxt::default`] does both in one step.
#[derive(Debug, Clone)]
pub struct Ctxt {
    funcs: HashMap<String, Func>,
    constants: HashMap<String, f64>,
    initialized: bool,
}

impl Ctxt {
    /// Creates an empty context with nothing registered.
    pub fn new() -> Ctxt {
        Ctxt {
            funcs: HashMap::new(),
            constants: HashMap::new(),
            initialized: false,
        }
    }

    /// Registers the built-in functions and the constants `e` and `pi`.
    ///
    /// Calling this on an already-initialized context is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        for func in Func::all() {
            self.add_func(func);
        }
        self.add_constant("e", consts::E);
        self.add_constant("pi", consts::PI);
        self.initialized = true;
    }

    /// Removes everything registered in the context. Lookups afterwards find nothing until
    /// [`Ctxt::init`] is called again.
    pub fn shutdown(&mut self) {
        self.funcs.clear();
        self.constants.clear();
        self.initialized = false;
    }

    /// Registers a function under its identifier. Re-registering a name is a no-op.
    pub fn add_func(&mut self, func: Func) {
        self.funcs.entry(func.name().to_string()).or_insert(func);
    }

    /// Looks up a registered function by name.
    pub fn get_func(&self, name: &str) -> Option<Func> {
        self.funcs.get(name).copied()
    }

    /// Returns the names of registered functions that are similar to the given name, computed
    /// with the Levenshtein distance.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&str> {
        self.funcs
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect()
    }

    /// Registers a constant with the given value.
    pub fn add_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_string(), value);
    }

    /// Looks up a registered constant by name.
    pub fn get_constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// All registered functions.
    pub fn funcs(&self) -> &HashMap<String, Func> {
        &self.funcs
    }

    /// All registered constants.
    pub fn constants(&self) -> &HashMap<String, f64> {
        &self.constants
    }
}

impl Default for Ctxt {
    fn default() -> Ctxt {
        let mut ctxt = Ctxt::new();
        ctxt.init();
        ctxt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_registers_builtins() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.funcs().len(), 17);
        assert_eq!(ctxt.constants().len(), 2);
        assert_eq!(ctxt.get_func("exp"), Some(Func::Exp));
        assert_eq!(ctxt.get_constant("pi"), Some(consts::PI));
    }

    #[test]
    fn init_is_idempotent() {
        let mut ctxt = Ctxt::default();
        ctxt.init();
        ctxt.init();
        assert_eq!(ctxt.funcs().len(), 17);
        assert_eq!(ctxt.constants().len(), 2);
    }

    #[test]
    fn shutdown_clears_everything() {
        let mut ctxt = Ctxt::default();
        ctxt.shutdown();
        assert_eq!(ctxt.get_func("sin"), None);
        assert_eq!(ctxt.get_constant("e"), None);

        // a context can be brought back up after shutdown
        ctxt.init();
        assert_eq!(ctxt.get_func("sin"), Some(Func::Sin));
    }

    #[test]
    fn similar_funcs() {
        let ctxt = Ctxt::default();
        let mut similar = ctxt.get_similar_funcs("sn");
        similar.sort();
        assert_eq!(similar, vec!["ln", "sin"]);

        assert_eq!(ctxt.get_similar_funcs("sqr"), vec!["sqrt"]);
    }
}
