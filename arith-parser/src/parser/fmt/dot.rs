//! Export of expression trees to the DOT graph description language.

use std::{fmt, io};
use crate::parser::ast::expr::Expr;

/// A wrapper type that implements [`Display`](fmt::Display) by writing the expression as an
/// undirected DOT graph.
///
/// Each node of the tree is declared once, named `node<N>` where `N` is the position of the node
/// in a left-to-right pre-order walk of the tree (the root is `node0`). Each edge from a binary
/// expression to one of its operands is declared right after the binary expression itself.
/// Every label is a quoted DOT string.
///
/// ```
/// use arith_parser::parser::{ast::Expr, fmt::Dot};
///
/// let expr = Expr::add(Expr::integer(3), Expr::symbol("x"));
/// assert_eq!(Dot(&expr).to_string(), "\
/// graph Expression {
/// \tnode0[label=\"+\"];
/// \tnode0 -- node1;
/// \tnode0 -- node2;
/// \tnode1[label=\"3\"];
/// \tnode2[label=\"x\"];
/// }
/// ");
/// ```
pub struct Dot<'a>(pub &'a Expr);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph Expression {{")?;
        fmt_node(self.0, 0, f)?;
        writeln!(f, "}}")
    }
}

/// Writes the node with the given index and all of its descendants.
fn fmt_node(expr: &Expr, id: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr {
        Expr::Literal(literal) => {
            writeln!(f, "\tnode{}[label=\"{}\"];", id, escape(&literal.to_string()))
        },
        Expr::Binary(binary) => {
            let lhs_id = id + 1;
            let rhs_id = lhs_id + binary.lhs.node_count();

            writeln!(f, "\tnode{}[label=\"{}\"];", id, binary.op)?;
            writeln!(f, "\tnode{} -- node{};", id, lhs_id)?;
            writeln!(f, "\tnode{} -- node{};", id, rhs_id)?;
            fmt_node(&binary.lhs, lhs_id, f)?;
            fmt_node(&binary.rhs, rhs_id, f)
        },
    }
}

/// Escapes the label so that it can be written inside a quoted DOT string.
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes the DOT graph of the expression to the given writer.
pub fn write_dot<W: io::Write>(expr: &Expr, mut w: W) -> io::Result<()> {
    write!(w, "{}", Dot(expr))?;
    w.flush()
}
