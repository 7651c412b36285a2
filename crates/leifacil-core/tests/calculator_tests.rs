use leifacil_core::civil::moratory_interest::{
    calculate_moratory_interest, InterestMode, MoratoryInterestInput,
};
use leifacil_core::family::alimony::{calculate_alimony, AlimonyInput};
use leifacil_core::labor::fgts::{calculate_fgts, FgtsCorrection, FgtsInput};
use leifacil_core::labor::termination::{calculate_notice_period, NoticePeriodInput};
use leifacil_core::other::moral_damages::{
    calculate_moral_damages, DamageType, MoralDamagesInput, Severity,
};
use leifacil_core::social_security::back_pay::{correct_back_pay, BackPayInput};
use leifacil_core::{IndexTable, MonthKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Known answers
// ===========================================================================

#[test]
fn test_alimony_caps_at_half_of_income() {
    let result = calculate_alimony(&AlimonyInput {
        net_income: dec!(10_000),
        children: 100,
        rate: None,
    })
    .unwrap();
    assert_eq!(result.result.percentage, dec!(50));
    assert_eq!(result.result.per_child, dec!(50));
}

#[test]
fn test_notice_period_bounds() {
    let notice = |years| {
        calculate_notice_period(&NoticePeriodInput {
            base_salary: dec!(3000),
            years_of_service: years,
        })
        .unwrap()
        .result
    };
    let fresh = notice(0);
    assert_eq!(fresh.notice_days, 30);
    assert_eq!(fresh.notice_pay, dec!(3000));

    let veteran = notice(25);
    assert_eq!(veteran.notice_days, 90);
    assert_eq!(veteran.notice_pay, dec!(9000));
}

#[test]
fn test_fgts_penalty_depends_on_dismissal() {
    let fgts = |dismissed_without_cause| {
        calculate_fgts(&FgtsInput {
            monthly_salaries: vec![dec!(1000), dec!(1000)],
            dismissed_without_cause,
            correction: FgtsCorrection::None,
        })
        .unwrap()
        .result
    };
    assert_eq!(fgts(false).dismissal_penalty, Decimal::ZERO);

    let dismissed = fgts(true);
    assert_eq!(dismissed.dismissal_penalty, dec!(0.4) * dismissed.corrected);
}

#[test]
fn test_simple_moratory_interest() {
    let result = calculate_moratory_interest(&MoratoryInterestInput {
        corrected_value: dec!(10_000),
        rate: dec!(0.01),
        months: 12,
        mode: InterestMode::Simple,
    })
    .unwrap();
    assert_eq!(result.result.interest, dec!(1200));
    assert_eq!(result.result.final_value, dec!(11_200));
}

#[test]
fn test_moral_damages_medical_error_severe() {
    let result = calculate_moral_damages(&MoralDamagesInput {
        damage_type: DamageType::MedicalError,
        severity: Severity::Severe,
    })
    .unwrap();
    assert_eq!(result.result.award, dec!(45_000));
}

#[test]
fn test_back_pay_with_partial_index_table() {
    let first = MonthKey::new(2023, 12).unwrap();
    let inpc: IndexTable = [(first, dec!(0.005))].into_iter().collect();
    let result = correct_back_pay(&BackPayInput {
        installments: vec![dec!(1500), dec!(1500), dec!(1500)],
        first_month: first,
        inpc,
    })
    .unwrap();

    let rows = &result.result.installments;
    assert_eq!(rows[0].corrected_amount, dec!(1507.5));
    assert_eq!(rows[1].month.to_string(), "2024-01");
    assert_eq!(rows[1].corrected_amount, dec!(1500));
    assert_eq!(result.warnings.len(), 1);
}
