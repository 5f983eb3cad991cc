use ethers_core::types::U256;

use crate::models::token::parse_amount;

/// One on-chain action a form can have in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Approve,
    Deposit,
    Borrow,
    Mint,
    Register,
}

impl ActionKind {
    pub fn verb(&self) -> &'static str {
        match self {
            ActionKind::Approve => "Approve",
            ActionKind::Deposit => "Deposit",
            ActionKind::Borrow => "Borrow",
            ActionKind::Mint => "Mint",
            ActionKind::Register => "Register",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            ActionKind::Approve => "Approval",
            ActionKind::Deposit => "Deposit",
            ActionKind::Borrow => "Loan",
            ActionKind::Mint => "Mint",
            ActionKind::Register => "Registration",
        }
    }

    pub fn in_flight_label(&self) -> &'static str {
        match self {
            ActionKind::Approve => "Approving...",
            ActionKind::Deposit => "Depositing...",
            ActionKind::Borrow => "Borrowing...",
            ActionKind::Mint => "Minting...",
            ActionKind::Register => "Registering...",
        }
    }

    pub fn confirming_label(&self) -> String {
        format!("Confirming {}...", self.noun())
    }

    /// Approval leaves the typed amount in place for the follow-up action;
    /// every primary action resets the form on success.
    fn clears_amount_on_success(&self) -> bool {
        !matches!(self, ActionKind::Approve | ActionKind::Register)
    }

    /// Deposits move the user's stablecoin, so they need a spending
    /// allowance and enough balance. Loans draw against posted collateral
    /// and mints create new value, so neither gate applies there.
    fn requires_allowance(&self) -> bool {
        matches!(self, ActionKind::Deposit)
    }

    fn requires_balance(&self) -> bool {
        matches!(self, ActionKind::Approve | ActionKind::Deposit)
    }
}

/// idle -> submitting -> confirming -> idle. Terminal states are always
/// Idle; failures only leave a transient inline error behind.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowPhase {
    Idle,
    Submitting(ActionKind),
    Confirming { kind: ActionKind, hash: String },
}

/// Per-form transaction flow controller: one amount input, one pending
/// action at a time, one inline error slot.
#[derive(Clone, Debug, PartialEq)]
pub struct TxFlow {
    phase: FlowPhase,
    amount: String,
    error: Option<String>,
}

impl Default for TxFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl TxFlow {
    pub fn new() -> Self {
        Self {
            phase: FlowPhase::Idle,
            amount: String::new(),
            error: None,
        }
    }

    pub fn phase(&self) -> &FlowPhase {
        &self.phase
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.phase != FlowPhase::Idle
    }

    pub fn in_flight(&self) -> Option<ActionKind> {
        match &self.phase {
            FlowPhase::Idle => None,
            FlowPhase::Submitting(kind) => Some(*kind),
            FlowPhase::Confirming { kind, .. } => Some(*kind),
        }
    }

    pub fn pending_hash(&self) -> Option<&str> {
        match &self.phase {
            FlowPhase::Confirming { hash, .. } => Some(hash),
            _ => None,
        }
    }

    /// Typing clears any stale error.
    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.amount = value.into();
        self.error = None;
    }

    /// Claim the form for one action. Refuses while anything is already
    /// in flight, which is the whole double-submission guard.
    pub fn begin(&mut self, kind: ActionKind) -> bool {
        if self.is_busy() {
            log::warn!("⚠️ {} ignored: another action is in flight", kind.verb());
            return false;
        }
        self.error = None;
        self.phase = FlowPhase::Submitting(kind);
        true
    }

    /// The wallet accepted the transaction and returned its hash.
    pub fn submitted(&mut self, hash: impl Into<String>) {
        if let FlowPhase::Submitting(kind) = self.phase {
            self.phase = FlowPhase::Confirming {
                kind,
                hash: hash.into(),
            };
        }
    }

    /// Receipt arrived with status 1.
    pub fn settle_success(&mut self) {
        if let Some(kind) = self.in_flight() {
            if kind.clears_amount_on_success() {
                self.amount.clear();
            }
        }
        self.phase = FlowPhase::Idle;
        self.error = None;
    }

    /// Rejection, revert, RPC failure or timeout. The form always comes
    /// back interactive; nothing is retried.
    pub fn settle_error(&mut self, message: impl Into<String>) {
        self.phase = FlowPhase::Idle;
        self.error = Some(message.into());
    }
}

/// Everything the gating functions look at. Snapshots are `None` until
/// their first fetch completes.
pub struct GateInput<'a> {
    pub amount: &'a str,
    pub balance: Option<U256>,
    pub allowance: Option<U256>,
    pub phase: &'a FlowPhase,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ButtonState {
    Ready(String),
    Blocked(String),
    Busy(String),
}

impl ButtonState {
    pub fn enabled(&self) -> bool {
        matches!(self, ButtonState::Ready(_))
    }

    pub fn label(&self) -> &str {
        match self {
            ButtonState::Ready(label) | ButtonState::Blocked(label) | ButtonState::Busy(label) => {
                label
            }
        }
    }
}

fn busy_state(kind: ActionKind, phase: &FlowPhase) -> Option<ButtonState> {
    match phase {
        FlowPhase::Idle => None,
        FlowPhase::Submitting(active) if *active == kind => {
            Some(ButtonState::Busy(kind.in_flight_label().to_string()))
        }
        FlowPhase::Confirming { kind: active, .. } if *active == kind => {
            Some(ButtonState::Busy(kind.confirming_label()))
        }
        // Some other action owns the form right now.
        _ => Some(ButtonState::Blocked(kind.verb().to_string())),
    }
}

/// Gate for the allowance step of an approve-then-act form.
pub fn approve_button(input: &GateInput) -> ButtonState {
    if let Some(state) = busy_state(ActionKind::Approve, input.phase) {
        return state;
    }

    let amount = match parse_amount(input.amount) {
        Ok(amount) => amount,
        Err(_) => return ButtonState::Blocked("Enter Amount to Approve".into()),
    };

    match input.balance {
        Some(balance) if amount <= balance => {}
        _ => return ButtonState::Blocked("Insufficient Balance".into()),
    }

    // A sufficient allowance never blocks approve; re-approving is a no-op
    // the contract accepts.
    match input.allowance {
        Some(allowance) if allowance >= amount => ButtonState::Ready("Approved ✓".into()),
        _ => ButtonState::Ready("Approve".into()),
    }
}

/// Gate for the primary action (deposit / borrow / mint).
pub fn act_button(kind: ActionKind, input: &GateInput) -> ButtonState {
    if let Some(state) = busy_state(kind, input.phase) {
        return state;
    }

    let amount = match parse_amount(input.amount) {
        Ok(amount) => amount,
        Err(_) => return ButtonState::Blocked(format!("Enter Amount to {}", kind.verb())),
    };

    if kind.requires_balance() {
        match input.balance {
            Some(balance) if amount <= balance => {}
            _ => return ButtonState::Blocked("Insufficient Balance".into()),
        }
    }

    // Gated on the last allowance snapshot, not on the approval promise;
    // a stale snapshot can briefly under- or over-permit the action.
    if kind.requires_allowance() {
        match input.allowance {
            Some(allowance) if allowance >= amount => {}
            _ => return ButtonState::Blocked("Approval Required First".into()),
        }
    }

    ButtonState::Ready(kind.verb().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::whole_tokens;

    fn gate<'a>(
        amount: &'a str,
        balance: Option<u64>,
        allowance: Option<u64>,
        phase: &'a FlowPhase,
    ) -> GateInput<'a> {
        GateInput {
            amount,
            balance: balance.map(whole_tokens),
            allowance: allowance.map(whole_tokens),
            phase,
        }
    }

    #[test]
    fn invalid_amounts_block_both_buttons() {
        let idle = FlowPhase::Idle;
        for amount in ["", "abc", "0", "-5", "1.2.3"] {
            let input = gate(amount, Some(500), Some(500), &idle);
            assert!(!approve_button(&input).enabled(), "approve for {:?}", amount);
            assert!(
                !act_button(ActionKind::Deposit, &input).enabled(),
                "deposit for {:?}",
                amount
            );
        }
    }

    #[test]
    fn amount_over_balance_blocks_both_with_message() {
        let idle = FlowPhase::Idle;
        let input = gate("1000", Some(500), Some(1000), &idle);

        let approve = approve_button(&input);
        let deposit = act_button(ActionKind::Deposit, &input);
        assert_eq!(approve, ButtonState::Blocked("Insufficient Balance".into()));
        assert_eq!(deposit, ButtonState::Blocked("Insufficient Balance".into()));
    }

    #[test]
    fn unloaded_balance_blocks() {
        let idle = FlowPhase::Idle;
        let input = gate("100", None, Some(500), &idle);
        assert!(!approve_button(&input).enabled());
        assert!(!act_button(ActionKind::Deposit, &input).enabled());
    }

    #[test]
    fn missing_allowance_blocks_act_but_not_approve() {
        let idle = FlowPhase::Idle;
        let input = gate("100", Some(500), Some(0), &idle);

        assert_eq!(approve_button(&input), ButtonState::Ready("Approve".into()));
        assert_eq!(
            act_button(ActionKind::Deposit, &input),
            ButtonState::Blocked("Approval Required First".into())
        );

        let unloaded = gate("100", Some(500), None, &idle);
        assert!(!act_button(ActionKind::Deposit, &unloaded).enabled());
    }

    #[test]
    fn sufficient_allowance_enables_deposit() {
        let idle = FlowPhase::Idle;
        let input = gate("100", Some(500), Some(100), &idle);

        assert_eq!(
            approve_button(&input),
            ButtonState::Ready("Approved ✓".into())
        );
        assert_eq!(
            act_button(ActionKind::Deposit, &input),
            ButtonState::Ready("Deposit".into())
        );
    }

    #[test]
    fn borrow_skips_balance_and_allowance_gates() {
        let idle = FlowPhase::Idle;
        let input = gate("100", None, None, &idle);
        assert_eq!(
            act_button(ActionKind::Borrow, &input),
            ButtonState::Ready("Borrow".into())
        );
    }

    #[test]
    fn begin_guards_against_double_submission() {
        let mut flow = TxFlow::new();
        flow.set_amount("100");

        assert!(flow.begin(ActionKind::Deposit));
        assert!(!flow.begin(ActionKind::Deposit));
        assert!(!flow.begin(ActionKind::Approve));

        flow.submitted("0xhash");
        assert!(!flow.begin(ActionKind::Deposit));
        assert_eq!(flow.pending_hash(), Some("0xhash"));
    }

    #[test]
    fn in_flight_action_shows_busy_and_blocks_the_other_button() {
        let phase = FlowPhase::Submitting(ActionKind::Deposit);
        let input = gate("100", Some(500), Some(100), &phase);

        assert_eq!(
            act_button(ActionKind::Deposit, &input),
            ButtonState::Busy("Depositing...".into())
        );
        assert!(!approve_button(&input).enabled());

        let confirming = FlowPhase::Confirming {
            kind: ActionKind::Deposit,
            hash: "0xabc".into(),
        };
        let input = gate("100", Some(500), Some(100), &confirming);
        assert_eq!(
            act_button(ActionKind::Deposit, &input),
            ButtonState::Busy("Confirming Deposit...".into())
        );
    }

    #[test]
    fn successful_act_resets_the_amount() {
        let mut flow = TxFlow::new();
        flow.set_amount("100");
        flow.begin(ActionKind::Deposit);
        flow.submitted("0xabc");
        flow.settle_success();

        assert_eq!(flow.phase(), &FlowPhase::Idle);
        assert_eq!(flow.amount(), "");
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn successful_approve_keeps_the_amount() {
        let mut flow = TxFlow::new();
        flow.set_amount("100");
        flow.begin(ActionKind::Approve);
        flow.submitted("0xabc");
        flow.settle_success();

        assert_eq!(flow.phase(), &FlowPhase::Idle);
        assert_eq!(flow.amount(), "100");
    }

    #[test]
    fn failure_always_returns_to_idle_with_inline_error() {
        let mut flow = TxFlow::new();
        flow.set_amount("100");

        flow.begin(ActionKind::Deposit);
        flow.settle_error("User rejected the request");
        assert_eq!(flow.phase(), &FlowPhase::Idle);
        assert_eq!(flow.error(), Some("User rejected the request"));
        assert_eq!(flow.amount(), "100");

        // The form is immediately usable again.
        assert!(flow.begin(ActionKind::Deposit));
        flow.submitted("0xdef");
        flow.settle_error("transaction reverted on-chain");
        assert_eq!(flow.phase(), &FlowPhase::Idle);
    }

    #[test]
    fn typing_clears_stale_errors() {
        let mut flow = TxFlow::new();
        flow.begin(ActionKind::Approve);
        flow.settle_error("boom");
        flow.set_amount("250");
        assert_eq!(flow.error(), None);
    }
}
