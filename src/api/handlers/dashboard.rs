use axum::{extract::Path, response::IntoResponse, Json};

use crate::api::dtos::{
    requests::{AddSlotRequest, ReplaceSlotsRequest},
    responses::{DashboardResponse, SlotsResponse},
};
use crate::api::extractors::session::StaffSession;
use crate::domain::models::{auth::Role, professional::Professional};
use crate::domain::services::{slots::SlotEditor, store::today};
use crate::error::AppError;

fn linked_professional(session: &StaffSession) -> Result<Professional, AppError> {
    let actor = session.require_role(Role::Staff)?;
    actor.professional_id.as_deref()
        .and_then(|id| session.store.professional_by_id(id))
        .cloned()
        .ok_or_else(|| AppError::NotFound("No professional profile is linked to this account".into()))
}

pub async fn overview(session: StaffSession) -> Result<impl IntoResponse, AppError> {
    let professional = linked_professional(&session)?;
    let actor = session.require_role(Role::Staff)?.clone();

    let today = today();
    let appointments: Vec<_> = session.store
        .appointments_of_professional(&professional.id)
        .into_iter()
        .cloned()
        .collect();
    let appointments_today = appointments.iter()
        .filter(|a| a.date == today)
        .cloned()
        .collect();

    Ok(Json(DashboardResponse {
        actor,
        professional,
        appointments_today,
        appointments,
    }))
}

pub async fn replace_slots(
    mut session: StaffSession,
    Json(payload): Json<ReplaceSlotsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let professional = linked_professional(&session)?;

    let mut editor = SlotEditor::new(&[]);
    for raw in &payload.slots {
        editor.add(raw)?;
    }

    let slots = session.store.set_professional_slots(&professional.id, editor.slots()).await?;
    Ok(Json(SlotsResponse { slots }))
}

pub async fn add_slot(
    mut session: StaffSession,
    Json(payload): Json<AddSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let professional = linked_professional(&session)?;

    let mut editor = SlotEditor::new(&professional.available_slots);
    if !editor.add(&payload.time)? {
        return Ok(Json(SlotsResponse { slots: editor.into_slots() }));
    }

    let slots = session.store.set_professional_slots(&professional.id, editor.slots()).await?;
    Ok(Json(SlotsResponse { slots }))
}

pub async fn remove_slot(
    Path(time): Path<String>,
    mut session: StaffSession,
) -> Result<impl IntoResponse, AppError> {
    let professional = linked_professional(&session)?;

    let mut editor = SlotEditor::new(&professional.available_slots);
    if !editor.remove(&time) {
        return Err(AppError::NotFound(format!("Slot '{}' is not offered", time)));
    }

    let slots = session.store.set_professional_slots(&professional.id, editor.slots()).await?;
    Ok(Json(SlotsResponse { slots }))
}
