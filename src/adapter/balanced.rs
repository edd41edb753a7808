use tracing::debug;

use crate::{Error, Result, Stack, Value};

fn code(c: char) -> Value {
    Value::from(u32::from(c))
}

/// Match `()`, `[]` and `{}` pairs in `expression`, ignoring every other character.
///
/// A stack holds the closer expected for each open bracket. A closer must match
/// the top of that stack, and the stack must be empty at the end.
pub fn check_balanced(expression: &str) -> Result<()> {
    let mut expected = Stack::new();

    for (offset, c) in expression.char_indices() {
        match c {
            '(' => expected.push(code(')')),
            '[' => expected.push(code(']')),
            '{' => expected.push(code('}')),
            ')' | ']' | '}' => match expected.pop() {
                Ok(closer) if closer == code(c) => {}
                _ => {
                    debug!("Unexpected '{}' at offset {}", c, offset);
                    return Err(Error::MalformedExpression { offset });
                }
            },
            _ => {}
        }
    }

    if expected.is_empty() {
        Ok(())
    } else {
        debug!("{} brackets left open", expected.len());
        Err(Error::MalformedExpression {
            offset: expression.len(),
        })
    }
}

/// Boolean form of [`check_balanced`]
pub fn is_balanced(expression: &str) -> bool {
    check_balanced(expression).is_ok()
}
