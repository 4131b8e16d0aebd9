use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::lead_dto::{
    ContactLeadRequest, CreditAnalysisRequest, CreditAnalysisResponse, DiscountLeadRequest,
    VisitRequest,
};
use crate::services::catalog_service::Catalog;
use crate::services::lead_service::{LeadReceipt, LeadService};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::format_cpf;

pub struct LeadController {
    catalog: Arc<Catalog>,
    leads: LeadService,
}

impl LeadController {
    pub fn new(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
            leads: state.leads.clone(),
        }
    }

    pub async fn contact(&self, request: ContactLeadRequest) -> AppResult<LeadReceipt> {
        request.validate()?;

        let vehicle = self
            .catalog
            .find(request.vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        info!("📝 Solicitação de contato para {} (id {})", vehicle.name, vehicle.id);
        Ok(self.leads.submit_contact(vehicle, request.contact()).await?)
    }

    pub async fn discount(&self, request: DiscountLeadRequest) -> AppResult<LeadReceipt> {
        request.validate()?;

        info!("📝 Solicitação de desconto recebida");
        Ok(self.leads.submit_discount(request.into()).await?)
    }

    pub async fn visit(&self, request: VisitRequest) -> AppResult<LeadReceipt> {
        request.validate()?;

        info!("📅 Agendamento de visita recebido");
        Ok(self.leads.submit_visit(request.into()).await?)
    }

    pub async fn credit_analysis(
        &self,
        request: CreditAnalysisRequest,
    ) -> AppResult<CreditAnalysisResponse> {
        request.validate()?;

        let receipt = self.leads.submit_credit_analysis(&request.cpf).await?;
        Ok(CreditAnalysisResponse {
            cpf: format_cpf(&request.cpf),
            receipt,
        })
    }
}
