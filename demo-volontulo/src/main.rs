use axum::{Router, response::Redirect, routing::get};
use dotenvy::dotenv;

use volontulo::{
    ActionStatus, LegacyStatus, NewOffer, NewOrganization, OfferStatus, OfferStatuses,
    RecruitmentStatus,
};
use volontulo_axum::{VOLONTULO_OFFERS_URL, volontulo_router};

mod server;
use server::{init_tracing, spawn_http_server};

/// Accounts created on first start: (email, password, administrator)
const DEMO_ACCOUNTS: [(&str, &str, bool); 3] = [
    ("volunteer@example.com", "123volunteer", false),
    ("organization@example.com", "123org", false),
    ("admin@example.com", "123admin", true),
];

/// Populate an empty database with one organization, two offers and the demo accounts.
async fn seed_demo_data() -> Result<(), Box<dyn std::error::Error>> {
    if !volontulo::list_organizations().await?.is_empty() {
        tracing::info!("Database already populated, skipping demo data");
        return Ok(());
    }

    let organization = volontulo::create_organization(NewOrganization {
        name: "Fundacja Volontulo".to_string(),
        address: "ul. Marszałkowska 1, Warszawa".to_string(),
        description: "Demo organization".to_string(),
    })
    .await?;

    for (title, status_old, recruitment_status) in [
        ("Sprzątanie parku", LegacyStatus::New, RecruitmentStatus::Closed),
        ("Pomoc w schronisku", LegacyStatus::Active, RecruitmentStatus::Open),
    ] {
        volontulo::create_offer(NewOffer {
            organization_id: organization.id,
            title: title.to_string(),
            location: "Warszawa".to_string(),
            statuses: OfferStatuses {
                offer_status: OfferStatus::Published,
                recruitment_status,
                action_status: ActionStatus::Future,
                status_old,
            },
            ..Default::default()
        })
        .await?;
    }

    for (email, password, is_administrator) in DEMO_ACCOUNTS {
        let user = volontulo::create_user_with_profile(email, password, is_administrator).await?;
        if email.starts_with("organization@") {
            volontulo::add_profile_organization(&user.id, organization.id).await?;
        }
    }

    tracing::info!("Demo data created");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("demo_volontulo");

    dotenv().ok();
    volontulo_axum::init().await?;
    seed_demo_data().await?;

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let app = Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary(VOLONTULO_OFFERS_URL.as_str()) }),
        )
        .merge(volontulo_router());

    spawn_http_server(port, app).await??;
    Ok(())
}
