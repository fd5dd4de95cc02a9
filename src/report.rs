use std::io::{self, Write};

use crate::types::RecurrentPayment;

pub fn write_errors<W: Write>(out: &mut W, errors: &[String]) -> io::Result<()> {
    writeln!(out, "Import errors found:")?;
    for error in errors {
        writeln!(out, "\t{}", error)?;
    }
    Ok(())
}

pub fn write_recurrent_payments<W: Write>(out: &mut W, payments: &[RecurrentPayment]) -> io::Result<()> {
    writeln!(out, "Recurrent payments descriptions:")?;
    for payment in payments {
        writeln!(
            out,
            "{} (total paid: {}, last paid: {})",
            payment.description, payment.total_paid, payment.last_payment_date
        )?;
    }
    Ok(())
}
