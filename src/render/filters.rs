//! MiniJinja filter registration.

use minijinja::Environment;

/// Registers all built-in filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Selects one of two strings by a boolean.
    // Usage: {{ is_dark | pick("Escuro", "Claro") }}
    env.add_filter("pick", pick);
}

fn pick(flag: bool, when_true: String, when_false: String) -> String {
    if flag {
        when_true
    } else {
        when_false
    }
}
