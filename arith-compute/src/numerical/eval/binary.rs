use arith_parser::parser::{ast::binary::Binary, token::op::BinOpKind};
use log::trace;
use rug::Integer;
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::DivisionByZero, Error},
    eval::EvalAt,
};

impl EvalAt for Binary {
    fn eval_at(&self, ctxt: &Ctxt, offset: usize) -> Result<Integer, Error> {
        let left = self.lhs.eval_at(ctxt, self.lhs_offset(offset))?;
        let right = self.rhs.eval_at(ctxt, self.rhs_offset(offset))?;

        let result = match self.op {
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
            BinOpKind::Mul => left * right,
            BinOpKind::Div => {
                if right.is_zero() {
                    return Err(Error::new(vec![self.rhs_span(offset)], DivisionByZero));
                }

                // `rug` truncates toward zero
                left / right
            },
        };

        trace!("evaluated {} to {}", self, result);
        Ok(result)
    }
}
