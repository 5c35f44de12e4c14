//! Switch controller: mutable handle over an immutable switch snapshot

use crate::error::SwitchError;
use crate::presenters::{SwitchPresenter, SwitchViewModel};
use crate::state::{SwitchEntity, SwitchProps, SwitchVariant};
use crate::use_cases::{
    HandleSwitchToggle, SwitchChangeHandler, SwitchRule, SwitchToggleResponse,
    SwitchValidationResponse, ValidateSwitch,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SwitchController {
    id: Uuid,
    switch: SwitchEntity,
}

impl SwitchController {
    pub fn new(props: SwitchProps) -> Result<Self, SwitchError> {
        Ok(Self::from_switch(SwitchEntity::create(props)?))
    }

    pub fn from_switch(switch: SwitchEntity) -> Self {
        Self {
            id: Uuid::new_v4(),
            switch,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn switch(&self) -> &SwitchEntity {
        &self.switch
    }

    pub fn view_model(&self) -> SwitchViewModel {
        SwitchPresenter::present(&self.switch)
    }

    /// Flip the value, committing only if `on_change` succeeds
    pub async fn toggle(
        &mut self,
        on_change: Option<&dyn SwitchChangeHandler>,
    ) -> SwitchToggleResponse {
        self.apply(None, on_change).await
    }

    pub async fn set_value(
        &mut self,
        value: bool,
        on_change: Option<&dyn SwitchChangeHandler>,
    ) -> SwitchToggleResponse {
        self.apply(Some(value), on_change).await
    }

    async fn apply(
        &mut self,
        value: Option<bool>,
        on_change: Option<&dyn SwitchChangeHandler>,
    ) -> SwitchToggleResponse {
        let response = HandleSwitchToggle
            .execute(&self.switch, value, on_change)
            .await;
        tracing::debug!(
            "Switch {} change success={} value={}",
            self.id,
            response.success,
            response.updated_switch.value()
        );
        self.switch = response.updated_switch;
        response
    }

    pub fn validate(&self, rules: &[SwitchRule]) -> SwitchValidationResponse {
        ValidateSwitch.execute(&self.switch, rules)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.switch = self.switch.with_disabled(disabled);
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.switch = self.switch.with_readonly(readonly);
    }

    pub fn set_variant(&mut self, variant: SwitchVariant) {
        self.switch = self.switch.with_variant(variant);
    }
}
