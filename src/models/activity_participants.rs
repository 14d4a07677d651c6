// One row per (activity, student) membership; `id` order is signup order.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityParticipantsRow {
    pub activity_name: String,
    pub email: String,
}
