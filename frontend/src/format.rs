use chrono::{DateTime, Datelike, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::model::{Payment, PaymentMethod, PaymentStatus};

pub const NAME_PLACEHOLDER: &str = "Nama tidak tersedia";
pub const AMOUNT_PLACEHOLDER: &str = "Jumlah belum ditentukan";

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn group_thousands(digits: &str, separator: char) -> String {
    let chars = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(separator);
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// id-ID number formatting: dot thousands, comma decimals, at most three fraction digits.
pub fn format_number_id(value: Decimal) -> String {
    let rounded = value.round_dp(3).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = rounded.abs().to_string();
    let (whole, fraction) = match plain.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut out = format!("{}{}", sign, group_thousands(whole, '.'));
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

pub fn format_rupiah(amount: Decimal) -> String {
    format!("Rp {}", format_number_id(amount))
}

/// Row amount, or the placeholder when the price is not set yet.
pub fn amount_label(payment: &Payment) -> String {
    match payment.amount {
        Some(amount) if amount > Decimal::ZERO => format_rupiah(amount),
        _ => AMOUNT_PLACEHOLDER.to_string(),
    }
}

pub fn patient_label(payment: &Payment) -> &str {
    payment.patient_name().unwrap_or(NAME_PLACEHOLDER)
}

/// Long Indonesian date, e.g. `1 Mei 2024`, in the given timezone.
pub fn format_long_date<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String {
    let local = at.with_timezone(tz);
    let month = MONTHS_ID[local.month0() as usize];
    format!("{} {} {}", local.day(), month, local.year())
}

pub fn status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "Belum Lunas",
        PaymentStatus::Completed => "Lunas",
        PaymentStatus::Cancelled => "Dibatalkan",
    }
}

pub fn status_badge_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => {
            "bg-[#173E63] text-white px-3 py-1 rounded-full text-[10px] font-bold"
        }
        PaymentStatus::Completed => {
            "bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold"
        }
        PaymentStatus::Cancelled => {
            "border border-border text-muted-foreground px-3 py-1 rounded-full text-[10px] font-bold"
        }
    }
}

/// Option label in the method dropdown.
pub fn method_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "Tunai",
        PaymentMethod::Debit => "Kartu Debit",
        PaymentMethod::Credit => "Kartu Kredit",
        PaymentMethod::Transfer => "Transfer Bank",
    }
}

/// Method as shown on a completed row: the stored value, capitalized.
pub fn method_caption(method: PaymentMethod) -> String {
    let raw = method.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::model::fixtures::payment;

    #[test]
    fn formats_rupiah_with_dot_grouping() {
        assert_eq!(format_rupiah(Decimal::ZERO), "Rp 0");
        assert_eq!(format_rupiah(Decimal::from(950)), "Rp 950");
        assert_eq!(format_rupiah(Decimal::from(150000)), "Rp 150.000");
        assert_eq!(format_rupiah(Decimal::from(1234567)), "Rp 1.234.567");
    }

    #[test]
    fn formats_fractions_with_comma() {
        assert_eq!(format_number_id(Decimal::new(150000_50, 2)), "150.000,5");
        assert_eq!(format_number_id(Decimal::new(12345678, 4)), "1.234,568");
        assert_eq!(format_number_id(Decimal::new(100000, 2)), "1.000");
        assert_eq!(format_number_id(Decimal::from(-2500)), "-2.500");
    }

    #[test]
    fn amount_label_uses_placeholder_for_unpriced_rows() {
        let mut p = payment(1, PaymentStatus::Pending, 0, None);
        assert_eq!(amount_label(&p), AMOUNT_PLACEHOLDER);
        p.amount = None;
        assert_eq!(amount_label(&p), AMOUNT_PLACEHOLDER);
        p.amount = Some(Decimal::from(75000));
        assert_eq!(amount_label(&p), "Rp 75.000");
    }

    #[test]
    fn patient_label_falls_back() {
        assert_eq!(patient_label(&payment(1, PaymentStatus::Pending, 0, None)), NAME_PLACEHOLDER);
        assert_eq!(
            patient_label(&payment(1, PaymentStatus::Pending, 0, Some("Ani"))),
            "Ani"
        );
    }

    #[test]
    fn long_date_in_indonesian() {
        let at: DateTime<Utc> = "2024-05-01T20:00:00Z".parse().unwrap();
        assert_eq!(format_long_date(&at, &Utc), "1 Mei 2024");
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_long_date(&at, &jakarta), "2 Mei 2024");
    }

    #[test]
    fn labels() {
        assert_eq!(status_label(PaymentStatus::Pending), "Belum Lunas");
        assert_eq!(status_label(PaymentStatus::Completed), "Lunas");
        assert_eq!(status_label(PaymentStatus::Cancelled), "Dibatalkan");
        assert_eq!(method_label(PaymentMethod::Debit), "Kartu Debit");
        assert_eq!(method_caption(PaymentMethod::Transfer), "Transfer");
    }
}
