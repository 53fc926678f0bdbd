//! 医師カード

use crate::components::doctor_modal::DoctorModal;
use doctor_finder_common::Doctor;
use leptos::prelude::*;

/// 写真があれば写真、なければイニシャル
#[component]
pub fn DoctorAvatar(doctor: Doctor, size: &'static str) -> impl IntoView {
    let class = format!("avatar avatar-{}", size);
    match doctor.photo_url() {
        Some(url) => view! {
            <img class=class src=url.to_string() alt=doctor.name.clone() />
        }
        .into_any(),
        None => view! {
            <div class=format!("{} avatar-initials", class)>{doctor.name_initials.clone()}</div>
        }
        .into_any(),
    }
}

#[component]
pub fn DoctorCard(doctor: Doctor) -> impl IntoView {
    let (show_modal, set_show_modal) = signal(false);

    let specialty = doctor.primary_speciality().unwrap_or_default().to_string();
    let introduction = doctor.introduction().map(str::to_string);
    let clinic = doctor.clinic.clone();
    let locality = doctor.clinic_address_line();
    let modal_doctor = doctor.clone();

    view! {
        <div class="doctor-card" data-testid="doctor-card">
            <div class="doctor-card-main">
                <DoctorAvatar doctor=doctor.clone() size="md" />

                <div class="doctor-info">
                    <h2 class="doctor-name" data-testid="doctor-name">{doctor.name.clone()}</h2>
                    <p class="doctor-specialty" data-testid="doctor-specialty">{specialty}</p>
                    {introduction.map(|text| view! { <p class="doctor-intro">{text}</p> })}
                    <p class="doctor-experience" data-testid="doctor-experience">
                        {doctor.experience.clone()}
                    </p>
                    {clinic.map(|clinic| view! { <p class="doctor-clinic">{clinic.name}</p> })}
                    {locality.map(|line| view! { <p class="doctor-locality">{line}</p> })}
                </div>
            </div>

            <div class="doctor-card-side">
                <p class="doctor-fee" data-testid="doctor-fee">{doctor.fees.clone()}</p>
                <button
                    class="btn btn-outline"
                    data-testid="view-profile"
                    on:click=move |_| set_show_modal.set(true)
                >
                    "View Profile"
                </button>
                <button class="btn btn-primary">"Book Appointment"</button>
            </div>

            <Show when=move || show_modal.get()>
                <DoctorModal
                    doctor=modal_doctor.clone()
                    on_close=move || set_show_modal.set(false)
                />
            </Show>
        </div>
    }
}
