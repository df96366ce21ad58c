//! Fold rules behind each Operator.
//!
//! All arithmetic is checked: overflow is reported rather than wrapped, and
//! nothing in here panics.

use std::convert::TryFrom;

use crate::eval_error::EvalErrorReason::{self, *};
use crate::operator::Operator;


pub type Args = Vec<i64>;
pub type Ret = Result<i64, EvalErrorReason>;


pub fn apply(op: Operator, args: Args) -> Ret {
    if args.is_empty() {
        return op.identity().ok_or(WrongArgumentCount {
            given: 0,
            minimum: 1,
        });
    }

    match op {
        Operator::Add => add(args),
        Operator::Sub => sub(args),
        Operator::Mul => mul(args),
        Operator::Div => div(args),
        Operator::Rem => rem(args),
        Operator::Pow => pow(args),
        Operator::Min => min(args),
        Operator::Max => max(args),
    }
}


pub fn add(args: Args) -> Ret {
    let mut curr: i64 = 0;
    for arg in args {
        curr = curr.checked_add(arg).ok_or(Overflow)?;
    }
    Ok(curr)
}

pub fn mul(args: Args) -> Ret {
    let mut curr: i64 = 1;
    for arg in args {
        curr = curr.checked_mul(arg).ok_or(Overflow)?;
    }
    Ok(curr)
}

pub fn sub(args: Args) -> Ret {
    reduce(args, |a, b| a.checked_sub(b).ok_or(Overflow))
}

/// Truncating division.
pub fn div(args: Args) -> Ret {
    reduce(args, |a, b| {
        if b == 0 {
            return Err(DivisionByZero);
        }
        // Only i64::MIN / -1 can fail past this point.
        a.checked_div(b).ok_or(Overflow)
    })
}

/// Truncating remainder; the sign follows the dividend.
pub fn rem(args: Args) -> Ret {
    reduce(args, |a, b| {
        if b == 0 {
            return Err(DivisionByZero);
        }
        // i64::MIN % -1 is 0, it just can't be computed with checked_rem.
        Ok(a.wrapping_rem(b))
    })
}

/// Folds left: (^ 2 3 2) is (2^3)^2.
pub fn pow(args: Args) -> Ret {
    reduce(args, power)
}

pub fn min(args: Args) -> Ret {
    reduce(args, |a, b| Ok(a.min(b)))
}

pub fn max(args: Args) -> Ret {
    reduce(args, |a, b| Ok(a.max(b)))
}


/// Folds from the first argument, which must exist.
fn reduce<F>(args: Args, f: F) -> Ret
where
    F: Fn(i64, i64) -> Ret,
{
    let mut iter = args.into_iter();
    let mut curr = match iter.next() {
        Some(first) => first,
        None => {
            return Err(WrongArgumentCount {
                given: 0,
                minimum: 1,
            })
        }
    };
    for arg in iter {
        curr = f(curr, arg)?;
    }
    Ok(curr)
}

/// Exact integer power.
///
/// Negative exponents truncate 1 / base^|exponent| toward zero.
fn power(base: i64, exponent: i64) -> Ret {
    let odd = exponent % 2 != 0;
    if exponent < 0 {
        return match base {
            0 => Err(DivisionByZero),
            1 => Ok(1),
            -1 => Ok(if odd { -1 } else { 1 }),
            _ => Ok(0),
        };
    }

    match u32::try_from(exponent) {
        Ok(exponent) => base.checked_pow(exponent).ok_or(Overflow),
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 => Ok(if odd { -1 } else { 1 }),
            _ => Err(Overflow),
        },
    }
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
