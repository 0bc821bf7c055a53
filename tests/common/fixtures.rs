// tests/common/fixtures.rs
//! Small C sources shared by the integration tests.

pub const BALANCED: &str = r#"#include <stdio.h>

/* brackets in here ( [ { do not count */
int main(void) {
    int a[3] = {1, 2, 3};
    char c = '\\';
    printf("(%d]\n", a[0]); // stray ) in a comment
    return 0;
}
"#;

/// `]` closes the `(` opened on line 2, column 8.
pub const MISMATCHED: &str = "int f(void) {\n    foo(a, b];\n}\n";

/// One `}` too many on line 1.
pub const EXTRA_CLOSER: &str = "if (x) { foo(); }}\n";

/// The body brace on line 1 is never closed.
pub const UNCLOSED: &str = "void f() { /* unterminated\n}\n";
