use leifacil_core::amortization::{price_installment, price_schedule, sac_schedule};
use leifacil_core::correction::{compound_fixed, compound_indexed};
use leifacil_core::{IndexTable, LeiFacilError, MonthKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Compounding properties
// ===========================================================================

#[test]
fn test_compound_fixed_never_shrinks_for_non_negative_rates() {
    let principals = [dec!(0), dec!(0.01), dec!(1000), dec!(250_000)];
    let rates = [dec!(0), dec!(0.001), dec!(0.01), dec!(0.05)];
    for p in principals {
        for r in rates {
            for n in [0u32, 1, 12, 120] {
                let amount = compound_fixed(p, r, n).unwrap();
                assert!(amount >= p, "compound_fixed({p}, {r}, {n}) = {amount}");
            }
        }
    }
}

#[test]
fn test_compound_fixed_identities() {
    assert_eq!(compound_fixed(dec!(1234.56), dec!(0), 360).unwrap(), dec!(1234.56));
    assert_eq!(compound_fixed(dec!(1234.56), dec!(0.02), 0).unwrap(), dec!(1234.56));
}

#[test]
fn test_absurd_period_count_is_overflow_not_panic() {
    let err = compound_fixed(dec!(1_000_000), dec!(0.5), u32::MAX).unwrap_err();
    assert!(matches!(err, LeiFacilError::Overflow { .. }));
}

#[test]
fn test_indexed_growth_across_year_boundary() {
    let nov = MonthKey::new(2023, 11).unwrap();
    let table: IndexTable = [
        (nov, dec!(0.01)),
        (MonthKey::new(2023, 12).unwrap(), dec!(0.01)),
        (MonthKey::new(2024, 1).unwrap(), dec!(0.01)),
    ]
    .into_iter()
    .collect();

    let growth = compound_indexed(dec!(1000), nov, 3, &table, None).unwrap();
    assert_eq!(growth.amount, compound_fixed(dec!(1000), dec!(0.01), 3).unwrap());
    assert!(growth.fallback_months.is_empty());
    assert_eq!(growth.months.last().map(|m| m.month.to_string()), Some("2024-01".into()));
}

// ===========================================================================
// Amortization properties
// ===========================================================================

fn loans() -> Vec<(Decimal, Decimal, u32)> {
    vec![
        (dec!(100_000), dec!(0.01), 12),
        (dec!(100), dec!(0.013), 7),
        (dec!(350_000), dec!(0.0075), 360),
        (dec!(10_000), dec!(0), 24),
        (dec!(1), dec!(0.05), 3),
    ]
}

#[test]
fn test_sac_amortizes_exact_principal() {
    for (p, r, n) in loans() {
        let schedule = sac_schedule(p, r, n).unwrap();
        let amortized: Decimal = schedule.installments.iter().map(|i| i.amortization).sum();
        assert_eq!(amortized, p);
        assert_eq!(schedule.installments.len(), n as usize);
        assert_eq!(schedule.installments.last().unwrap().ending_balance, Decimal::ZERO);
    }
}

#[test]
fn test_price_closes_and_costs_at_least_sac() {
    for (p, r, n) in loans() {
        let price = price_schedule(p, r, n).unwrap();
        let sac = sac_schedule(p, r, n).unwrap();
        let installment = price_installment(p, r, n).unwrap();

        assert_eq!(price.installments.len(), n as usize);
        assert!(price.installments.iter().all(|i| i.installment == installment));
        assert_eq!(price.installments.last().unwrap().ending_balance, Decimal::ZERO);
        if r > Decimal::ZERO {
            assert!(installment * Decimal::from(n) >= sac.total_paid);
        }
    }
}

#[test]
fn test_zero_period_loans_rejected() {
    assert!(matches!(
        price_schedule(dec!(1000), dec!(0.01), 0),
        Err(LeiFacilError::InvalidParameter { .. })
    ));
    assert!(matches!(
        sac_schedule(dec!(1000), dec!(0.01), 0),
        Err(LeiFacilError::InvalidParameter { .. })
    ));
}
