// Resume helpers: professional summary rewrite and skills optimisation.
// Unlike the other operations these do no field-presence validation; absent
// fields are rendered as empty strings and the provider decides what to do.

pub mod handlers;
pub mod prompts;
