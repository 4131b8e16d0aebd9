use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::lead::{LeadContact, VisitForm};
use crate::services::lead_service::LeadReceipt;
use crate::utils::validation::{
    validate_cpf, validate_optional_date, validate_optional_store, validate_optional_time,
    validate_store,
};

// Request del modal "Solicitar" de un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct ContactLeadRequest {
    pub vehicle_id: u32,

    #[serde(default)]
    #[validate(length(min = 1, max = 120))]
    pub nome: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 30))]
    pub telefone: String,

    #[serde(default)]
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(custom = "validate_store")]
    pub loja: String,
}

impl ContactLeadRequest {
    pub fn contact(&self) -> LeadContact {
        LeadContact {
            nome: self.nome.clone(),
            telefone: self.telefone.clone(),
            email: self.email.clone(),
            loja: self.loja.clone(),
        }
    }
}

// Request del modal de descuento
#[derive(Debug, Deserialize, Validate)]
pub struct DiscountLeadRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 120))]
    pub nome: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 30))]
    pub telefone: String,

    #[serde(default)]
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(custom = "validate_store")]
    pub loja: String,
}

impl From<DiscountLeadRequest> for LeadContact {
    fn from(request: DiscountLeadRequest) -> Self {
        LeadContact {
            nome: request.nome,
            telefone: request.telefone,
            email: request.email,
            loja: request.loja,
        }
    }
}

// Request de agenda de visita; tienda, fecha y hora son opcionales
#[derive(Debug, Deserialize, Validate)]
pub struct VisitRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 120))]
    pub nome: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 120))]
    pub sobrenome: String,

    #[serde(default)]
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 30))]
    pub telefone: String,

    #[serde(default)]
    #[validate(custom = "validate_optional_store")]
    pub loja: String,

    #[serde(default)]
    #[validate(custom = "validate_optional_date")]
    pub data: String,

    #[serde(default)]
    #[validate(custom = "validate_optional_time")]
    pub hora: String,
}

impl From<VisitRequest> for VisitForm {
    fn from(request: VisitRequest) -> Self {
        VisitForm {
            nome: request.nome,
            sobrenome: request.sobrenome,
            email: request.email,
            telefone: request.telefone,
            loja: request.loja,
            data: request.data,
            hora: request.hora,
        }
    }
}

// Request de análisis de crédito
#[derive(Debug, Deserialize, Validate)]
pub struct CreditAnalysisRequest {
    #[serde(default)]
    #[validate(custom = "validate_cpf")]
    pub cpf: String,
}

// Response del análisis de crédito, con el CPF enmascarado
#[derive(Debug, Serialize)]
pub struct CreditAnalysisResponse {
    pub cpf: String,
    #[serde(flatten)]
    pub receipt: LeadReceipt,
}
