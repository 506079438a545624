use contracts::shared::review::ReviewDecision;
use leptos::prelude::*;
use thaw::*;

/// Approve/reject confirmation with the operator's notes. Notes are
/// mandatory when rejecting.
#[component]
pub fn ReviewDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    decision: Signal<ReviewDecision>,
    notes: RwSignal<String>,
    /// Describes the request under review
    #[prop(into)]
    subject: Signal<String>,
    #[prop(into)]
    processing: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let is_reject = move || decision.get() == ReviewDecision::Reject;
    let missing_reason = move || is_reject() && notes.get().trim().is_empty();

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if is_reject() { "Rejeter la demande" } else { "Approuver la demande" }}
                    </DialogTitle>
                    <DialogContent>
                        <p class="dialog__subject">{move || subject.get()}</p>
                        <Label>
                            {move || if is_reject() { "Motif du rejet (obligatoire)" } else { "Note (facultative)" }}
                        </Label>
                        <Textarea value=notes placeholder="Note pour l'historique de la demande" />
                        <Show when=missing_reason>
                            <span class="form-field__error">"Le motif est requis pour rejeter."</span>
                        </Show>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                            disabled=processing
                        >
                            "Annuler"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=processing
                        >
                            {move || {
                                if processing.get() {
                                    "Traitement..."
                                } else if is_reject() {
                                    "Rejeter"
                                } else {
                                    "Approuver"
                                }
                            }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Yes/no confirmation before a destructive or state-changing action.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    message: Signal<String>,
    #[prop(into)]
    processing: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <p>{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Annuler"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=processing
                        >
                            {move || if processing.get() { "Traitement..." } else { "Confirmer" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
