//! Modelos de leads
//!
//! Formularios de contacto del sitio (cotización de vehículo, descuento,
//! agenda de visita) y las máquinas de estado de los modales que los contienen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::vehicle::UnknownLabel;

/// Tiendas disponibles para atención
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Store {
    Barra,
    Botafogo,
    Niteroi,
}

impl Store {
    pub const ALL: &'static [Store] = &[Store::Barra, Store::Botafogo, Store::Niteroi];

    pub fn slug(&self) -> &'static str {
        match self {
            Store::Barra => "barra",
            Store::Botafogo => "botafogo",
            Store::Niteroi => "niteroi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Store::Barra => "Barra da Tijuca",
            Store::Botafogo => "Botafogo",
            Store::Niteroi => "Niterói",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Store {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Store::ALL
            .iter()
            .copied()
            .find(|store| store.slug() == wanted)
            .ok_or_else(|| UnknownLabel {
                field: "loja",
                value: s.to_string(),
            })
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Datos comunes a los modales de contacto y descuento
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadContact {
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub loja: String,
}

/// Formulario de agenda de visita
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitForm {
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub telefone: String,
    pub loja: String,
    pub data: String,
    pub hora: String,
}

/// Fases de un formulario simple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPhase {
    Idle,
    Submitting,
    Succeeded,
}

impl LeadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPhase::Idle => "idle",
            LeadPhase::Submitting => "submitting",
            LeadPhase::Succeeded => "succeeded",
        }
    }
}

/// Fases del modal de descuento, que se puede minimizar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPhase {
    Open,
    Minimized,
    Submitting,
    Succeeded,
}

impl DiscountPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountPhase::Open => "open",
            DiscountPhase::Minimized => "minimized",
            DiscountPhase::Submitting => "submitting",
            DiscountPhase::Succeeded => "succeeded",
        }
    }
}

/// Formulario con envío simulado: Idle -> Submitting -> Succeeded
#[derive(Debug, Clone)]
pub struct LeadFormState<F> {
    form: F,
    phase: LeadPhase,
}

pub type ContactModalState = LeadFormState<LeadContact>;
pub type VisitFormState = LeadFormState<VisitForm>;

/// Formularios que saben si tienen todos los campos obligatorios
pub trait CompletableForm {
    fn is_complete(&self) -> bool;
}

impl CompletableForm for LeadContact {
    fn is_complete(&self) -> bool {
        filled(&self.nome) && filled(&self.telefone) && filled(&self.email) && filled(&self.loja)
    }
}

impl CompletableForm for VisitForm {
    // tienda, fecha y hora son opcionales
    fn is_complete(&self) -> bool {
        filled(&self.nome) && filled(&self.sobrenome) && filled(&self.email) && filled(&self.telefone)
    }
}

impl<F: CompletableForm> LeadFormState<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            phase: LeadPhase::Idle,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn phase(&self) -> LeadPhase {
        self.phase
    }

    /// Los campos sólo se editan en Idle
    pub fn edit(&mut self, update: impl FnOnce(&mut F)) {
        if self.phase == LeadPhase::Idle {
            update(&mut self.form);
        }
    }

    /// Inicia el envío. No hace nada si el formulario está incompleto o ya se envió.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != LeadPhase::Idle || !self.form.is_complete() {
            return false;
        }
        self.phase = LeadPhase::Submitting;
        true
    }

    /// Fin del envío simulado
    pub fn complete(&mut self) {
        if self.phase == LeadPhase::Submitting {
            self.phase = LeadPhase::Succeeded;
        }
    }
}

/// Modal de descuento: se puede minimizar en cualquier momento
#[derive(Debug, Clone)]
pub struct DiscountModalState {
    form: LeadContact,
    phase: DiscountPhase,
    // envío en curso mientras el modal está minimizado
    pending: bool,
}

impl Default for DiscountModalState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscountModalState {
    pub fn new() -> Self {
        Self {
            form: LeadContact::default(),
            phase: DiscountPhase::Open,
            pending: false,
        }
    }

    pub fn form(&self) -> &LeadContact {
        &self.form
    }

    pub fn phase(&self) -> DiscountPhase {
        self.phase
    }

    pub fn edit(&mut self, update: impl FnOnce(&mut LeadContact)) {
        if self.phase == DiscountPhase::Open {
            update(&mut self.form);
        }
    }

    pub fn minimize(&mut self) {
        if self.phase == DiscountPhase::Submitting {
            self.pending = true;
        }
        self.phase = DiscountPhase::Minimized;
    }

    pub fn restore(&mut self) {
        if self.phase == DiscountPhase::Minimized {
            self.phase = if self.pending {
                DiscountPhase::Submitting
            } else {
                DiscountPhase::Open
            };
        }
    }

    pub fn begin_submit(&mut self) -> bool {
        if self.phase != DiscountPhase::Open || !self.form.is_complete() {
            return false;
        }
        self.phase = DiscountPhase::Submitting;
        true
    }

    /// Completa el envío y limpia los campos, aunque el modal esté minimizado
    pub fn complete(&mut self) {
        let in_flight = self.phase == DiscountPhase::Submitting || self.pending;
        if in_flight {
            self.pending = false;
            self.phase = DiscountPhase::Succeeded;
            self.form = LeadContact::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_contact() -> LeadContact {
        LeadContact {
            nome: "Ana".to_string(),
            telefone: "21999990000".to_string(),
            email: "ana@example.com".to_string(),
            loja: "barra".to_string(),
        }
    }

    #[test]
    fn test_submit_is_inert_when_incomplete() {
        let mut state = ContactModalState::new(LeadContact {
            loja: String::new(),
            ..complete_contact()
        });
        assert!(!state.begin_submit());
        assert_eq!(state.phase(), LeadPhase::Idle);

        state.edit(|f| f.loja = "   ".to_string());
        assert!(!state.begin_submit());

        state.edit(|f| f.loja = "botafogo".to_string());
        assert!(state.begin_submit());
        assert_eq!(state.phase(), LeadPhase::Submitting);
    }

    #[test]
    fn test_contact_flow_reaches_success() {
        let mut state = ContactModalState::new(complete_contact());
        assert!(state.begin_submit());
        // un segundo clic durante el envío no hace nada
        assert!(!state.begin_submit());
        state.edit(|f| f.nome = "Outro".to_string());
        assert_eq!(state.form().nome, "Ana");
        state.complete();
        assert_eq!(state.phase(), LeadPhase::Succeeded);
    }

    #[test]
    fn test_visit_form_requires_personal_data_only() {
        let form = VisitForm {
            nome: "Ana".to_string(),
            sobrenome: "Souza".to_string(),
            email: "ana@example.com".to_string(),
            telefone: "21999990000".to_string(),
            ..Default::default()
        };
        assert!(form.is_complete());
        assert!(!VisitForm::default().is_complete());
    }

    #[test]
    fn test_discount_modal_clears_after_success() {
        let mut modal = DiscountModalState::new();
        modal.edit(|f| *f = complete_contact());
        assert!(modal.begin_submit());
        modal.complete();
        assert_eq!(modal.phase(), DiscountPhase::Succeeded);
        assert_eq!(modal.form(), &LeadContact::default());
    }

    #[test]
    fn test_discount_modal_minimized_submission_still_completes() {
        let mut modal = DiscountModalState::new();
        modal.edit(|f| *f = complete_contact());
        assert!(modal.begin_submit());
        modal.minimize();
        assert_eq!(modal.phase(), DiscountPhase::Minimized);
        modal.complete();
        assert_eq!(modal.phase(), DiscountPhase::Succeeded);
    }

    #[test]
    fn test_discount_modal_minimize_and_restore() {
        let mut modal = DiscountModalState::new();
        modal.minimize();
        assert_eq!(modal.phase(), DiscountPhase::Minimized);
        assert!(!modal.begin_submit());
        modal.restore();
        assert_eq!(modal.phase(), DiscountPhase::Open);
    }

    #[test]
    fn test_store_slugs() {
        assert_eq!("niteroi".parse::<Store>(), Ok(Store::Niteroi));
        assert_eq!(Store::Niteroi.label(), "Niterói");
        assert!("centro".parse::<Store>().is_err());
    }
}
