//! Servicio de leads
//!
//! Conduce las máquinas de estado de los formularios y entrega cada lead a
//! un `LeadSink`. El sink por defecto sólo simula el envío: espera un tiempo
//! fijo y registra el lead en el log. No hay llamada de red.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::lead::{
    ContactModalState, DiscountModalState, LeadContact, VisitForm, VisitFormState,
};
use crate::models::vehicle::Vehicle;
use crate::utils::validation::cpf_digits;

/// Tiempo del envío simulado
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadKind {
    Contact,
    Discount,
    Visit,
    CreditAnalysis,
}

/// Lead listo para entregar a un consultor
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub id: Uuid,
    pub kind: LeadKind,
    pub received_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl Lead {
    fn new(kind: LeadKind, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            received_at: Utc::now(),
            payload,
        }
    }
}

/// Comprobante devuelto al cliente
#[derive(Debug, Clone, Serialize)]
pub struct LeadReceipt {
    pub id: Uuid,
    pub kind: LeadKind,
    pub phase: &'static str,
    pub received_at: DateTime<Utc>,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum LeadDeliveryError {
    #[error("lead recusado pelo destino: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("formulário '{0}' incompleto")]
    Incomplete(&'static str),

    #[error("CPF deve conter 11 dígitos")]
    InvalidCpf,

    #[error(transparent)]
    Delivery(#[from] LeadDeliveryError),
}

/// Destino de los leads enviados
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(&self, lead: &Lead) -> Result<(), LeadDeliveryError>;
}

/// Sink de placeholder: espera y registra
#[derive(Debug, Clone)]
pub struct SimulatedLeadSink {
    delay: Duration,
}

impl SimulatedLeadSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedLeadSink {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMISSION_DELAY)
    }
}

#[async_trait]
impl LeadSink for SimulatedLeadSink {
    async fn deliver(&self, lead: &Lead) -> Result<(), LeadDeliveryError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        info!("📨 Lead {} ({:?}) enviado a los consultores", lead.id, lead.kind);
        debug!("📨 Payload del lead {}: {}", lead.id, lead.payload);
        Ok(())
    }
}

const CONTACT_SUCCESS: &str =
    "Em breve um de nossos consultores entrará em contato para apresentar as melhores condições.";
const DISCOUNT_SUCCESS: &str =
    "Sua solicitação foi enviada com sucesso. Em breve um de nossos consultores entrará em contato.";
const VISIT_SUCCESS: &str = "Visita agendada. Estamos prontos para receber você.";
const CREDIT_SUCCESS: &str = "CPF recebido. Em breve você terá o resultado da sua análise.";

#[derive(Clone)]
pub struct LeadService {
    sink: Arc<dyn LeadSink>,
}

impl LeadService {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self { sink }
    }

    /// Modal "Solicitar" de un vehículo del catálogo
    pub async fn submit_contact(
        &self,
        vehicle: &Vehicle,
        contact: LeadContact,
    ) -> Result<LeadReceipt, LeadError> {
        let mut state = ContactModalState::new(contact);
        if !state.begin_submit() {
            warn!("⚠️ Formulario de contacto incompleto para vehículo {}", vehicle.id);
            return Err(LeadError::Incomplete("contato"));
        }

        let lead = Lead::new(
            LeadKind::Contact,
            json!({
                "vehicle_id": vehicle.id,
                "vehicle_name": vehicle.name,
                "contact": state.form(),
            }),
        );
        self.sink.deliver(&lead).await?;
        state.complete();

        Ok(receipt(&lead, state.phase().as_str(), CONTACT_SUCCESS))
    }

    /// Modal de descuento; los campos se limpian al terminar
    pub async fn submit_discount(&self, contact: LeadContact) -> Result<LeadReceipt, LeadError> {
        let mut modal = DiscountModalState::new();
        modal.edit(|form| *form = contact);
        if !modal.begin_submit() {
            return Err(LeadError::Incomplete("desconto"));
        }

        let lead = Lead::new(LeadKind::Discount, json!({ "contact": modal.form() }));
        self.sink.deliver(&lead).await?;
        modal.complete();

        Ok(receipt(&lead, modal.phase().as_str(), DISCOUNT_SUCCESS))
    }

    pub async fn submit_visit(&self, form: VisitForm) -> Result<LeadReceipt, LeadError> {
        let mut state = VisitFormState::new(form);
        if !state.begin_submit() {
            return Err(LeadError::Incomplete("visita"));
        }

        let lead = Lead::new(LeadKind::Visit, json!({ "visit": state.form() }));
        self.sink.deliver(&lead).await?;
        state.complete();

        Ok(receipt(&lead, state.phase().as_str(), VISIT_SUCCESS))
    }

    /// Sólo se envía un CPF con 11 dígitos; la máscara se ignora
    pub async fn submit_credit_analysis(&self, cpf: &str) -> Result<LeadReceipt, LeadError> {
        let digits = cpf_digits(cpf);
        if digits.len() != 11 {
            return Err(LeadError::InvalidCpf);
        }

        let lead = Lead::new(LeadKind::CreditAnalysis, json!({ "cpf": digits }));
        self.sink.deliver(&lead).await?;

        Ok(receipt(&lead, "succeeded", CREDIT_SUCCESS))
    }
}

fn receipt(lead: &Lead, phase: &'static str, message: &'static str) -> LeadReceipt {
    LeadReceipt {
        id: lead.id,
        kind: lead.kind,
        phase,
        received_at: lead.received_at,
        message,
    }
}
