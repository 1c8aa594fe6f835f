use std::collections::HashMap;

/// Free-form payload attached to an event, carried through to every
/// expanded instance untouched.
pub type Metadata = HashMap<String, String>;
