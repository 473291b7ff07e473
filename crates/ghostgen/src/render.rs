//! Textual rendering of generated method bodies.
//!
//! The formatting rules live here and nowhere else: one statement per
//! paragraph, paragraphs separated by a blank line, four-space indentation
//! inside branches. Rendering is a pure function of the statement sequence,
//! so identical metadata always produces byte-identical source text.

use crate::body::Stmt;
use crate::metadata::MethodKind;

/// Render one statement to source text.
pub fn render_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Guard {
            holder,
            invoker,
            kind,
        } => render_guard(holder, invoker, *kind),
        Stmt::PublicBranch { map_symbol, kind } => render_public_branch(map_symbol, *kind),
        Stmt::DelegateParent { kind } => {
            format!(
                "return parent::{}({});",
                kind.method_name(),
                argument_list(*kind)
            )
        }
        Stmt::DefaultFallback { kind } => render_default_fallback(*kind),
    }
}

/// Render a full body: statements joined by a blank line, guard first.
pub fn render_body(stmts: &[Stmt]) -> String {
    let mut out = String::new();
    for (i, stmt) in stmts.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&render_stmt(stmt));
    }
    out
}

fn render_guard(holder: &str, invoker: &str, kind: MethodKind) -> String {
    let mut payload = String::from("'name' => $name");
    if kind == MethodKind::Set {
        payload.push_str(", 'value' => $value");
    }
    format!(
        "$this->{holder} && $this->{invoker}('{}', array({payload}));",
        kind.method_name()
    )
}

fn render_public_branch(map_symbol: &str, kind: MethodKind) -> String {
    let mut out = format!("if (isset(self::${map_symbol}[$name])) {{\n");
    match kind {
        MethodKind::Get => out.push_str("    return $this->$name;\n"),
        MethodKind::Set => out.push_str("    return ($this->$name = $value);\n"),
        MethodKind::Isset => out.push_str("    return isset($this->$name);\n"),
        MethodKind::Unset => out.push_str("    unset($this->$name);\n\n    return;\n"),
    }
    out.push('}');
    out
}

fn render_default_fallback(kind: MethodKind) -> String {
    match kind {
        MethodKind::Get => "return null;".to_owned(),
        // Default dynamic-assignment semantics: write through to the
        // virtual property and yield the assigned value.
        MethodKind::Set => "return ($this->$name = $value);".to_owned(),
        MethodKind::Isset => "return false;".to_owned(),
        MethodKind::Unset => "return;".to_owned(),
    }
}

fn argument_list(kind: MethodKind) -> String {
    kind.parameter_names()
        .iter()
        .map(|name| format!("${name}"))
        .collect::<Vec<_>>()
        .join(", ")
}
