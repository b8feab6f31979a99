use leptos::prelude::*;

use crate::models::{GrowthChart, ShowcaseItem, Stat};

#[cfg(feature = "ssr")]
async fn app_state() -> Result<crate::state::AppState, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<crate::state::AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(state)
}

/// Headline metrics for the stats dashboard
#[server]
pub async fn get_stats() -> Result<Vec<Stat>, ServerFnError> {
    use crate::services::catalog;

    let state = app_state().await?;
    state.content_delay().await;

    let stats = catalog::stats();
    tracing::debug!(count = stats.len(), "serving stats");
    Ok(stats)
}

/// Six months of user growth figures
#[server]
pub async fn get_growth_chart() -> Result<GrowthChart, ServerFnError> {
    use crate::services::catalog;

    let state = app_state().await?;
    state.content_delay().await;

    let chart = catalog::growth_chart(&mut rand::thread_rng());
    Ok(chart)
}

/// Projects shown on the showcase page
#[server]
pub async fn get_showcase_items() -> Result<Vec<ShowcaseItem>, ServerFnError> {
    use crate::services::catalog;

    let state = app_state().await?;
    state.content_delay().await;

    let items = catalog::showcase_items();
    tracing::debug!(count = items.len(), "serving showcase items");
    Ok(items)
}

/// Register interest in the newsletter. Nothing is stored.
#[server]
pub async fn subscribe_newsletter(email: String) -> Result<(), ServerFnError> {
    use crate::models::validate_email;

    let state = app_state().await?;
    let email = validate_email(&email).map_err(|e| ServerFnError::new(e.to_string()))?;
    state.content_delay().await;

    tracing::info!(%email, "newsletter subscription");
    Ok(())
}
