//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="text-center my-5">
            <h1>"Resume Analyzer"</h1>
            <p class="lead text-muted">
                "Upload your resume to get an ATS compatibility score. "
                "Add a job description to see how well you match it."
            </p>
        </div>
    }
}
