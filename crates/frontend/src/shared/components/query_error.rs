use crate::shared::api_utils::ApiError;
use crate::shared::components::skeleton::SkeletonCard;
use crate::shared::icons::icon;
use crate::shared::query::QueryResult;
use leptos::prelude::*;
use thaw::*;

fn describe(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Não foi possível conectar ao servidor.".to_string(),
        ApiError::Http { status, .. } if *status >= 500 => {
            format!("O servidor encontrou um erro ({}).", status)
        }
        ApiError::Http { status, .. } => format!("A requisição falhou ({}).", status),
        ApiError::Decode(_) => "Resposta inesperada do servidor.".to_string(),
        ApiError::InvalidRequest(_) => "Parâmetros inválidos.".to_string(),
    }
}

/// Inline error state of a single widget, with a retry button.
#[component]
pub fn QueryErrorView(error: ApiError, on_retry: Callback<()>) -> impl IntoView {
    let message = describe(&error);
    let detail = error.to_string();

    view! {
        <div class="query-error" title=detail>
            <span class="query-error__icon">{icon("alert-triangle")}</span>
            <span class="query-error__message">{message}</span>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_retry.run(())
            >
                "Tentar novamente"
            </Button>
        </div>
    }
}

/// Per-widget rendering of a query: data when available (even if a later
/// refetch failed), the error with a retry button, or a skeleton.
pub fn query_view<T, V, F>(query: QueryResult<T>, skeleton_height: u32, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
{
    move || {
        if let Some(data) = query.data() {
            return render(data).into_any();
        }
        if let Some(error) = query.error() {
            let on_retry = Callback::new(move |_| query.refetch());
            return view! { <QueryErrorView error=error on_retry=on_retry /> }.into_any();
        }
        view! { <SkeletonCard height_px=skeleton_height /> }.into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            describe(&ApiError::Http { status: 503, message: String::new() }),
            "O servidor encontrou um erro (503)."
        );
        assert_eq!(
            describe(&ApiError::Http { status: 404, message: String::new() }),
            "A requisição falhou (404)."
        );
        assert_eq!(describe(&ApiError::Network("x".into())), "Não foi possível conectar ao servidor.");
    }
}
