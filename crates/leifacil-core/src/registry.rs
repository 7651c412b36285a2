//! Calculator catalogue and JSON dispatch.
//!
//! Every calculator has a stable kebab-case id (`"juros-mora"`,
//! `"price-sac"`, ...). [`calculate`] deserialises the typed input for that
//! id, runs it and serialises the output envelope, so front ends (CLI, Node
//! binding) only ever deal in `serde_json::Value`.

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::LeiFacilError;
use crate::types::ComputationOutput;
use crate::LeiFacilResult;
use crate::{banking, civil, family, labor, other, social_security, tax};

/// Practice area a calculator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Civil,
    Labor,
    SocialSecurity,
    Tax,
    Banking,
    Family,
    Other,
}

impl Area {
    pub fn id(self) -> &'static str {
        match self {
            Area::Civil => "civel",
            Area::Labor => "trabalhista",
            Area::SocialSecurity => "previdenciaria",
            Area::Tax => "tributaria",
            Area::Banking => "bancaria",
            Area::Family => "familia",
            Area::Other => "outros",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Area::Civil => "Área Cível",
            Area::Labor => "Área Trabalhista",
            Area::SocialSecurity => "Área Previdenciária",
            Area::Tax => "Área Tributária",
            Area::Banking => "Bancária e Financeira",
            Area::Family => "Família e Sucessões",
            Area::Other => "Outros Cálculos",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Run a typed calculator against a JSON input.
fn run_with<I, O, F>(input: Value, calculator: F) -> LeiFacilResult<Value>
where
    I: DeserializeOwned,
    O: Serialize,
    F: Fn(&I) -> LeiFacilResult<ComputationOutput<O>>,
{
    let typed: I = serde_json::from_value(input)?;
    let output = calculator(&typed)?;
    Ok(serde_json::to_value(output)?)
}

macro_rules! calculators {
    ($($variant:ident => $id:literal, $area:ident, $name:literal, $calculator:path;)+) => {
        /// Every calculator the engine exposes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CalculatorId {
            $($variant,)+
        }

        impl CalculatorId {
            pub const ALL: &'static [CalculatorId] = &[$(CalculatorId::$variant,)+];

            pub fn id(self) -> &'static str {
                match self {
                    $(CalculatorId::$variant => $id,)+
                }
            }

            pub fn area(self) -> Area {
                match self {
                    $(CalculatorId::$variant => Area::$area,)+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(CalculatorId::$variant => $name,)+
                }
            }

            /// Deserialise `input`, run the calculator, serialise the envelope.
            pub fn run(self, input: Value) -> LeiFacilResult<Value> {
                match self {
                    $(CalculatorId::$variant => run_with(input, $calculator),)+
                }
            }
        }
    };
}

calculators! {
    DebtUpdate => "atualizacao-debito", Civil, "Atualização de Débitos Judiciais", civil::debt_update::update_debt;
    MoratoryInterest => "juros-mora", Civil, "Juros de Mora", civil::moratory_interest::calculate_moratory_interest;
    LostProfits => "lucros-cessantes", Civil, "Lucros Cessantes", civil::lost_profits::calculate_lost_profits;
    Rent => "alugueis", Civil, "Aluguéis em Ações de Despejo", civil::rent::calculate_rent_arrears;
    ContractualPenalty => "multa-contratual", Civil, "Multas Contratuais", civil::contractual_penalty::calculate_contractual_penalty;
    Inventory => "inventario", Civil, "Inventário e Partilha de Bens", civil::inventory::calculate_inventory;
    SalaryBalance => "saldo-salario", Labor, "Saldo de Salário", labor::termination::calculate_salary_balance;
    NoticePeriod => "aviso-previo", Labor, "Aviso Prévio", labor::termination::calculate_notice_period;
    Vacation => "ferias", Labor, "Férias Vencidas e Proporcionais", labor::termination::calculate_vacation;
    ThirteenthSalary => "decimo-terceiro", Labor, "13º Salário Proporcional", labor::termination::calculate_thirteenth_salary;
    Fgts => "fgts", Labor, "FGTS + Multa de 40%", labor::fgts::calculate_fgts;
    Overtime => "horas-extras", Labor, "Horas Extras", labor::premiums::calculate_overtime;
    NightShift => "adicional-noturno", Labor, "Adicional Noturno", labor::premiums::calculate_night_shift;
    HazardPremiums => "adicionais", Labor, "Adicionais de Periculosidade e Insalubridade", labor::premiums::calculate_hazard_premiums;
    Reclassification => "reenquadramento", Labor, "Reenquadramento Salarial", labor::reclassification::calculate_reclassification;
    LaborMoralDamages => "dano-moral-trabalhista", Labor, "Dano Moral Trabalhista", labor::moral_damages::calculate_labor_moral_damages;
    ContributionTime => "tempo-contribuicao", SocialSecurity, "Tempo de Contribuição", social_security::contribution_time::calculate_contribution_time;
    Retirement => "simulacao-aposentadoria", SocialSecurity, "Simulação de Aposentadoria", social_security::retirement::simulate_retirement;
    Rmi => "rmi", SocialSecurity, "Renda Mensal Inicial (RMI)", social_security::rmi::calculate_rmi;
    BackPay => "atrasados-beneficios", SocialSecurity, "Atrasados em Benefícios", social_security::back_pay::correct_back_pay;
    SpecialTimeConversion => "conversao-tempo-especial", SocialSecurity, "Conversão de Tempo Especial", social_security::contribution_time::convert_special_time;
    LateTax => "tributos-atraso", Tax, "Tributos em Atraso", tax::late_tax::calculate_late_tax;
    TaxInstallments => "parcelamento", Tax, "Parcelamento (Refis)", tax::installments::calculate_tax_installments;
    CreditOffset => "compensacao-creditos", Tax, "Compensação de Créditos", tax::credit_offset::calculate_credit_offset;
    UndueTaxRefund => "impostos-indevidos", Tax, "Impostos Indevidos (Restituição)", tax::refund::calculate_undue_tax_refund;
    Alimony => "pensao-alimenticia", Family, "Pensão Alimentícia", family::alimony::calculate_alimony;
    AssetDivision => "partilha-bens", Family, "Partilha de Bens e Meação", family::asset_division::divide_assets;
    ContractReview => "revisao-contratos", Banking, "Revisão de Contratos Bancários", banking::contract_review::review_contract;
    Anatocism => "anatocismo", Banking, "Anatocismo (Juros Compostos)", banking::anatocism::calculate_anatocism;
    PriceSac => "price-sac", Banking, "Comparação Price x SAC", banking::price_sac::compare_price_sac;
    AbusiveInterest => "juros-abusivos", Banking, "Juros Abusivos", banking::abusive_interest::calculate_abusive_interest;
    Losses => "perdas-danos", Other, "Perdas e Danos", other::losses::calculate_losses;
    FgtsCorrection => "fgts-correcao", Other, "FGTS (Correção)", other::fgts_correction::correct_fgts;
    AccountingExpertise => "pericia-contabil", Other, "Perícia Contábil", other::accounting_expertise::calculate_accounting_expertise;
    MoralDamages => "danos-morais", Other, "Danos Morais", other::moral_damages::calculate_moral_damages;
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CalculatorId {
    type Err = LeiFacilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorId::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| LeiFacilError::UnknownCalculator(s.to_string()))
    }
}

impl Serialize for CalculatorId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for CalculatorId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: CalculatorId,
    pub area: Area,
    pub area_name: &'static str,
    pub name: &'static str,
}

/// All calculators, grouped by area in catalogue order.
pub fn catalog() -> Vec<CatalogEntry> {
    CalculatorId::ALL
        .iter()
        .map(|&id| CatalogEntry {
            id,
            area: id.area(),
            area_name: id.area().name(),
            name: id.name(),
        })
        .collect()
}

/// Run the calculator registered under `id`.
pub fn calculate(id: &str, input: Value) -> LeiFacilResult<Value> {
    let calculator: CalculatorId = id.parse()?;
    calculator.run(input)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub calculator: String,
    pub input: Value,
}

/// Evaluate independent requests in parallel. Results keep request order;
/// one failing request does not affect the others.
pub fn calculate_batch(requests: Vec<BatchRequest>) -> Vec<LeiFacilResult<Value>> {
    requests
        .into_par_iter()
        .map(|request| calculate(&request.calculator, request.input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_round_trip() {
        let ids: HashSet<&str> = CalculatorId::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), CalculatorId::ALL.len());
        for c in CalculatorId::ALL {
            assert_eq!(c.id().parse::<CalculatorId>().unwrap(), *c);
        }
    }

    #[test]
    fn test_catalog_covers_every_area() {
        let entries = catalog();
        assert_eq!(entries.len(), 35);
        let areas: HashSet<Area> = entries.iter().map(|e| e.area).collect();
        assert_eq!(areas.len(), 7);
    }

    #[test]
    fn test_unknown_calculator() {
        let err = calculate("calculadora-inexistente", json!({})).unwrap_err();
        assert!(matches!(err, LeiFacilError::UnknownCalculator(_)));
    }

    #[test]
    fn test_malformed_input_is_serialization_error() {
        let err = calculate("danos-morais", json!({ "damage_type": "Offense" })).unwrap_err();
        assert!(matches!(err, LeiFacilError::SerializationError(_)));
    }

    #[test]
    fn test_dispatch_returns_envelope() {
        let value = calculate(
            "danos-morais",
            json!({ "damage_type": "MedicalError", "severity": "Severe" }),
        )
        .unwrap();
        assert_eq!(value["result"]["award"], json!("45000"));
        assert!(value["methodology"].is_string());
    }

    #[test]
    fn test_batch_keeps_order() {
        let requests = vec![
            BatchRequest {
                calculator: "aviso-previo".into(),
                input: json!({ "base_salary": "3000", "years_of_service": 0 }),
            },
            BatchRequest {
                calculator: "nope".into(),
                input: json!({}),
            },
            BatchRequest {
                calculator: "pensao-alimenticia".into(),
                input: json!({ "net_income": "10000", "children": 100 }),
            },
        ];
        let results = calculate_batch(requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap()["result"]["notice_days"], json!(30));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap()["result"]["percentage"], json!("50"));
    }
}
