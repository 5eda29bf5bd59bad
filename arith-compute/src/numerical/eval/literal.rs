use arith_parser::parser::ast::literal::Literal;
use rug::Integer;
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::UndefinedVariable, Error},
    eval::EvalAt,
};

impl EvalAt for Literal {
    fn eval_at(&self, ctxt: &Ctxt, offset: usize) -> Result<Integer, Error> {
        match self {
            Literal::Integer(int) => Ok(int.clone()),
            Literal::Symbol(name) => ctxt.get_var(name)
                .cloned()
                .ok_or_else(|| Error::new(
                    vec![offset..offset + name.len()],
                    UndefinedVariable { name: name.clone() },
                )),
        }
    }
}
