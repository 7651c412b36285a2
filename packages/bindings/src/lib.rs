use napi::Result as NapiResult;
use napi_derive::napi;

use leifacil_core::registry;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Catalogue and generic dispatch
// ---------------------------------------------------------------------------

#[napi]
pub fn catalog() -> NapiResult<String> {
    serde_json::to_string(&registry::catalog()).map_err(to_napi_error)
}

#[napi]
pub fn calculate(id: String, input_json: String) -> NapiResult<String> {
    let input: serde_json::Value = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = registry::calculate(&id, input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Runs `[{"calculator", "input"}, ...]` in parallel; each element of the
/// returned array is either `{"ok": true, "output"}` or `{"ok": false, "error"}`.
#[napi]
pub fn calculate_batch(requests_json: String) -> NapiResult<String> {
    let requests: Vec<registry::BatchRequest> =
        serde_json::from_str(&requests_json).map_err(to_napi_error)?;
    let results: Vec<serde_json::Value> = registry::calculate_batch(requests)
        .into_iter()
        .map(|outcome| match outcome {
            Ok(output) => serde_json::json!({ "ok": true, "output": output }),
            Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
        })
        .collect();
    serde_json::to_string(&results).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Civil
// ---------------------------------------------------------------------------

#[napi]
pub fn update_debt(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::civil::debt_update::DebtUpdateInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::civil::debt_update::update_debt(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn moratory_interest(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::civil::moratory_interest::MoratoryInterestInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::civil::moratory_interest::calculate_moratory_interest(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn lost_profits(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::civil::lost_profits::LostProfitsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::civil::lost_profits::calculate_lost_profits(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn rent_arrears(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::civil::rent::RentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::civil::rent::calculate_rent_arrears(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn contractual_penalty(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::civil::contractual_penalty::ContractualPenaltyInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::civil::contractual_penalty::calculate_contractual_penalty(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn inventory(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::civil::inventory::InventoryInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::civil::inventory::calculate_inventory(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Labor
// ---------------------------------------------------------------------------

#[napi]
pub fn salary_balance(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::termination::SalaryBalanceInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::termination::calculate_salary_balance(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn notice_period(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::termination::NoticePeriodInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::termination::calculate_notice_period(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn vacation(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::termination::VacationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::termination::calculate_vacation(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn thirteenth_salary(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::termination::ThirteenthSalaryInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::termination::calculate_thirteenth_salary(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn fgts(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::fgts::FgtsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::fgts::calculate_fgts(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn overtime(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::premiums::OvertimeInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::premiums::calculate_overtime(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn night_shift(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::premiums::NightShiftInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::premiums::calculate_night_shift(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn hazard_premiums(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::premiums::HazardPremiumsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::premiums::calculate_hazard_premiums(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn reclassification(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::reclassification::ReclassificationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::reclassification::calculate_reclassification(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn labor_moral_damages(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::labor::moral_damages::LaborMoralDamagesInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::labor::moral_damages::calculate_labor_moral_damages(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Social security
// ---------------------------------------------------------------------------

#[napi]
pub fn contribution_time(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::social_security::contribution_time::ContributionTimeInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::social_security::contribution_time::calculate_contribution_time(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn special_time_conversion(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::social_security::contribution_time::SpecialTimeConversionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::social_security::contribution_time::convert_special_time(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn retirement(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::social_security::retirement::RetirementInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::social_security::retirement::simulate_retirement(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn rmi(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::social_security::rmi::RmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::social_security::rmi::calculate_rmi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn back_pay(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::social_security::back_pay::BackPayInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::social_security::back_pay::correct_back_pay(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Tax
// ---------------------------------------------------------------------------

#[napi]
pub fn late_tax(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::tax::late_tax::LateTaxInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::tax::late_tax::calculate_late_tax(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn tax_installments(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::tax::installments::TaxInstallmentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::tax::installments::calculate_tax_installments(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn credit_offset(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::tax::credit_offset::CreditOffsetInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::tax::credit_offset::calculate_credit_offset(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn undue_tax_refund(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::tax::refund::UndueTaxInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::tax::refund::calculate_undue_tax_refund(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Banking
// ---------------------------------------------------------------------------

#[napi]
pub fn contract_review(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::banking::contract_review::ContractReviewInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::banking::contract_review::review_contract(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn anatocism(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::banking::anatocism::AnatocismInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::banking::anatocism::calculate_anatocism(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn price_sac(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::banking::price_sac::PriceSacInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::banking::price_sac::compare_price_sac(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn abusive_interest(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::banking::abusive_interest::AbusiveInterestInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::banking::abusive_interest::calculate_abusive_interest(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

#[napi]
pub fn alimony(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::family::alimony::AlimonyInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::family::alimony::calculate_alimony(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn asset_division(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::family::asset_division::AssetDivisionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::family::asset_division::divide_assets(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Other
// ---------------------------------------------------------------------------

#[napi]
pub fn losses(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::other::losses::LossesInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::other::losses::calculate_losses(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn fgts_correction(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::other::fgts_correction::FgtsCorrectionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::other::fgts_correction::correct_fgts(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn accounting_expertise(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::other::accounting_expertise::AccountingExpertiseInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::other::accounting_expertise::calculate_accounting_expertise(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn moral_damages(input_json: String) -> NapiResult<String> {
    let input: leifacil_core::other::moral_damages::MoralDamagesInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = leifacil_core::other::moral_damages::calculate_moral_damages(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
