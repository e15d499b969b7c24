//! Domain state store.
//!
//! Owns the entity collections and mirrors every change to the injected
//! storage adapter as whole-collection JSON blobs. Mutations by unknown id
//! are silent no-ops, and a failing mirror write is logged without touching
//! the in-memory result.

mod seed;

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{
    CreateCategory, CreateEquipment, CreateRequest, CreateTeam, CreateWorkCenter, Equipment,
    EquipmentCategory, EquipmentStatus, MaintenanceRequest, RequestStatus, Team, TeamMember,
    UpdateCategory, UpdateEquipment, UpdateRequest, UpdateTeam, UpdateWorkCenter, WorkCenter,
};
use crate::policy;
use crate::storage::{
    self, StorageAdapter, CATEGORIES_KEY, DARK_MODE_KEY, EQUIPMENT_KEY, REQUESTS_KEY, TEAMS_KEY,
    WORK_CENTERS_KEY,
};

/// Single source of truth for the GearGuard entity collections.
///
/// Views never hold authoritative copies; they read through the accessors
/// and mutate through the methods here.
pub struct AppStore {
    equipment: Vec<Equipment>,
    teams: Vec<Team>,
    requests: Vec<MaintenanceRequest>,
    work_centers: Vec<WorkCenter>,
    categories: Vec<EquipmentCategory>,
    dark_mode: bool,
    cascade_delete: bool,
    adapter: Arc<dyn StorageAdapter>,
}

impl AppStore {
    /// Load every collection from the adapter, seeding missing blobs with
    /// the built-in sample dataset.
    ///
    /// A blob that fails to parse is discarded with a warning and replaced
    /// by its seed. An adapter read failure aborts construction.
    pub fn open(adapter: Arc<dyn StorageAdapter>, config: &Config) -> Result<Self, AppError> {
        let equipment = load_or_seed(adapter.as_ref(), EQUIPMENT_KEY, seed::sample_equipment)?;
        let teams = load_or_seed(adapter.as_ref(), TEAMS_KEY, seed::sample_teams)?;
        let requests = load_or_seed(adapter.as_ref(), REQUESTS_KEY, seed::sample_requests)?;
        let work_centers = load_or_seed(adapter.as_ref(), WORK_CENTERS_KEY, Vec::new)?;
        let categories = load_or_seed(adapter.as_ref(), CATEGORIES_KEY, Vec::new)?;
        let dark_mode = load_or_seed(adapter.as_ref(), DARK_MODE_KEY, || false)?;

        Ok(AppStore {
            equipment,
            teams,
            requests,
            work_centers,
            categories,
            dark_mode,
            cascade_delete: config.cascade_delete,
            adapter,
        })
    }

    // ==================== ACCESSORS ====================

    /// All registered equipment, in insertion order.
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// All teams, in insertion order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// All maintenance requests, in insertion order.
    pub fn requests(&self) -> &[MaintenanceRequest] {
        &self.requests
    }

    /// All work centers, in insertion order.
    pub fn work_centers(&self) -> &[WorkCenter] {
        &self.work_centers
    }

    /// All equipment categories, in insertion order.
    pub fn categories(&self) -> &[EquipmentCategory] {
        &self.categories
    }

    /// Current dark-mode preference.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Set the dark-mode preference and persist it.
    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
        storage::write_json(self.adapter.as_ref(), DARK_MODE_KEY, &self.dark_mode);
    }

    // ==================== EQUIPMENT OPERATIONS ====================

    /// Register a new piece of equipment and persist the collection.
    pub fn add_equipment(&mut self, data: CreateEquipment) -> Equipment {
        // The id derives from the current collection length, not a counter:
        // deleting and re-adding can mint a duplicate id.
        let id = format!("EQ-{:03}", self.equipment.len() + 1);
        let item = Equipment {
            id,
            name: data.name,
            serial_number: data.serial_number,
            category: data.category,
            department: data.department,
            employee: data.employee,
            location: data.location,
            purchase_date: data.purchase_date,
            warranty_info: data.warranty_info,
            maintenance_team: data.maintenance_team,
            assigned_technician: data.assigned_technician,
            status: EquipmentStatus::default(),
            image: None,
            scrapped_date: None,
            scrapped_reason: None,
        };
        self.equipment.push(item.clone());
        self.persist_equipment();
        item
    }

    /// Merge a patch into the matching equipment; unknown ids are ignored.
    pub fn update_equipment(&mut self, id: &str, patch: UpdateEquipment) {
        let Some(item) = self.equipment.iter_mut().find(|e| e.id == id) else {
            return;
        };
        if let Some(v) = patch.name {
            item.name = v;
        }
        if let Some(v) = patch.serial_number {
            item.serial_number = v;
        }
        if let Some(v) = patch.category {
            item.category = v;
        }
        if let Some(v) = patch.department {
            item.department = v;
        }
        if let Some(v) = patch.employee {
            item.employee = Some(v);
        }
        if let Some(v) = patch.location {
            item.location = v;
        }
        if let Some(v) = patch.purchase_date {
            item.purchase_date = Some(v);
        }
        if let Some(v) = patch.warranty_info {
            item.warranty_info = v;
        }
        if let Some(v) = patch.maintenance_team {
            item.maintenance_team = v;
        }
        if let Some(v) = patch.assigned_technician {
            item.assigned_technician = Some(v);
        }
        if let Some(v) = patch.status {
            item.status = v;
        }
        if let Some(v) = patch.image {
            item.image = Some(v);
        }
        if let Some(v) = patch.scrapped_date {
            item.scrapped_date = Some(v);
        }
        if let Some(v) = patch.scrapped_reason {
            item.scrapped_reason = Some(v);
        }
        self.persist_equipment();
    }

    /// Remove equipment by id; unknown ids are ignored.
    ///
    /// With cascade enabled the equipment's requests go with it; otherwise
    /// they survive with a dangling equipmentId.
    pub fn delete_equipment(&mut self, id: &str) {
        let before = self.equipment.len();
        self.equipment.retain(|e| e.id != id);
        if self.equipment.len() == before {
            return;
        }
        self.persist_equipment();

        if self.cascade_delete && self.requests.iter().any(|r| r.equipment_id == id) {
            self.requests.retain(|r| r.equipment_id != id);
            self.persist_requests();
        }
    }

    // ==================== TEAM OPERATIONS ====================

    /// Create a team and persist the collection.
    pub fn add_team(&mut self, data: CreateTeam) -> Team {
        // Same length-derived id scheme as equipment, same collision caveat.
        let id = format!("TEAM-{:03}", self.teams.len() + 1);
        let team = Team {
            id,
            name: data.name,
            specialty: data.specialty,
            team_lead: data.team_lead,
            members: data.members,
        };
        self.teams.push(team.clone());
        self.persist_teams();
        team
    }

    /// Merge a patch into the matching team; unknown ids are ignored.
    pub fn update_team(&mut self, id: &str, patch: UpdateTeam) {
        let Some(team) = self.teams.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(v) = patch.name {
            team.name = v;
        }
        if let Some(v) = patch.specialty {
            team.specialty = v;
        }
        if let Some(v) = patch.team_lead {
            team.team_lead = v;
        }
        if let Some(v) = patch.members {
            team.members = v;
        }
        self.persist_teams();
    }

    /// Append a member to a team; unknown team ids are ignored.
    pub fn add_team_member(&mut self, team_id: &str, member: TeamMember) {
        let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) else {
            return;
        };
        team.members.push(member);
        self.persist_teams();
    }

    // ==================== REQUEST OPERATIONS ====================

    /// Raise a new maintenance request and persist the collection.
    ///
    /// The store assigns id, ticketId, and createdAt, and forces status to
    /// New with overdue=false; a status in the payload is ignored.
    pub fn add_request(&mut self, data: CreateRequest) -> MaintenanceRequest {
        // Millisecond-clock ids collide under rapid creation.
        let id = format!("REQ-{}", Utc::now().timestamp_millis());
        let request = MaintenanceRequest {
            ticket_id: format!("#{}", id),
            id,
            subject: data.subject,
            equipment_id: data.equipment_id,
            equipment_name: data.equipment_name,
            request_type: data.request_type,
            scheduled_date: data.scheduled_date,
            duration: data.duration,
            hours_spent: data.hours_spent,
            priority: data.priority,
            status: RequestStatus::New,
            assigned_team: data.assigned_team,
            assigned_technician: data.assigned_technician,
            description: data.description,
            created_at: Utc::now(),
            overdue: false,
        };
        self.requests.push(request.clone());
        self.persist_requests();
        request
    }

    /// Merge a patch into the matching request, then recompute the overdue
    /// flag from the merged scheduled date and status; unknown ids are
    /// ignored.
    pub fn update_request(&mut self, id: &str, patch: UpdateRequest) {
        let Some(request) = self.requests.iter_mut().find(|r| r.id == id) else {
            return;
        };
        if let Some(v) = patch.subject {
            request.subject = v;
        }
        if let Some(v) = patch.equipment_id {
            request.equipment_id = v;
        }
        if let Some(v) = patch.equipment_name {
            request.equipment_name = v;
        }
        if let Some(v) = patch.request_type {
            request.request_type = v;
        }
        if let Some(v) = patch.scheduled_date {
            request.scheduled_date = Some(v);
        }
        if let Some(v) = patch.duration {
            request.duration = Some(v);
        }
        if let Some(v) = patch.hours_spent {
            request.hours_spent = Some(v);
        }
        if let Some(v) = patch.priority {
            request.priority = v;
        }
        if let Some(v) = patch.status {
            request.status = v;
        }
        if let Some(v) = patch.assigned_team {
            request.assigned_team = Some(v);
        }
        if let Some(v) = patch.assigned_technician {
            request.assigned_technician = Some(v);
        }
        if let Some(v) = patch.description {
            request.description = v;
        }

        request.overdue = policy::compute_overdue(
            request.scheduled_date,
            request.status,
            request.overdue,
            Utc::now().date_naive(),
        );
        self.persist_requests();
    }

    /// Remove a request by id; unknown ids are ignored.
    pub fn delete_request(&mut self, id: &str) {
        let before = self.requests.len();
        self.requests.retain(|r| r.id != id);
        if self.requests.len() != before {
            self.persist_requests();
        }
    }

    /// Scrap the equipment linked to a request.
    ///
    /// Two-call contract: a caller that drives a request's status to Scrap
    /// through [`AppStore::update_request`] must follow up with this method;
    /// the status patch alone never touches the equipment.
    /// [`AppStore::transition_request_status`] wraps both steps.
    pub fn handle_request_scrap(&mut self, request_id: &str) {
        let found = self
            .requests
            .iter()
            .find(|r| r.id == request_id)
            .map(|r| (r.equipment_id.clone(), r.ticket_id.clone()));
        if let Some((equipment_id, ticket_id)) = found {
            let patch = policy::scrap_update(&ticket_id, Utc::now());
            self.update_equipment(&equipment_id, patch);
        }
    }

    /// Move a request to a new status, applying the scrap side effect in the
    /// same call when the target status is Scrap.
    pub fn transition_request_status(&mut self, id: &str, new_status: RequestStatus) {
        self.update_request(
            id,
            UpdateRequest {
                status: Some(new_status),
                ..UpdateRequest::default()
            },
        );
        if new_status == RequestStatus::Scrap {
            self.handle_request_scrap(id);
        }
    }

    // ==================== WORK CENTER OPERATIONS ====================

    /// Create a work center and persist the collection.
    pub fn add_work_center(&mut self, data: CreateWorkCenter) -> WorkCenter {
        let id = format!("WC-{:03}", self.work_centers.len() + 1);
        let center = WorkCenter {
            id,
            name: data.name,
            cost: data.cost,
            time: data.time,
            cost_per_hour: data.cost_per_hour,
            capacity: data.capacity,
            cost_target: data.cost_target,
            alternative_work_centers: data.alternative_work_centers,
        };
        self.work_centers.push(center.clone());
        self.persist_work_centers();
        center
    }

    /// Merge a patch into the matching work center; unknown ids are ignored.
    pub fn update_work_center(&mut self, id: &str, patch: UpdateWorkCenter) {
        let Some(center) = self.work_centers.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if let Some(v) = patch.name {
            center.name = v;
        }
        if let Some(v) = patch.cost {
            center.cost = v;
        }
        if let Some(v) = patch.time {
            center.time = v;
        }
        if let Some(v) = patch.cost_per_hour {
            center.cost_per_hour = v;
        }
        if let Some(v) = patch.capacity {
            center.capacity = v;
        }
        if let Some(v) = patch.cost_target {
            center.cost_target = v;
        }
        if let Some(v) = patch.alternative_work_centers {
            center.alternative_work_centers = v;
        }
        self.persist_work_centers();
    }

    /// Remove a work center by id; unknown ids are ignored.
    pub fn delete_work_center(&mut self, id: &str) {
        let before = self.work_centers.len();
        self.work_centers.retain(|w| w.id != id);
        if self.work_centers.len() != before {
            self.persist_work_centers();
        }
    }

    // ==================== CATEGORY OPERATIONS ====================

    /// Create an equipment category and persist the collection.
    pub fn add_equipment_category(&mut self, data: CreateCategory) -> EquipmentCategory {
        let id = format!("CAT-{:03}", self.categories.len() + 1);
        let category = EquipmentCategory {
            id,
            name: data.name,
            keywords: data.keywords,
            company: data.company,
        };
        self.categories.push(category.clone());
        self.persist_categories();
        category
    }

    /// Merge a patch into the matching category; unknown ids are ignored.
    pub fn update_equipment_category(&mut self, id: &str, patch: UpdateCategory) {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == id) else {
            return;
        };
        if let Some(v) = patch.name {
            category.name = v;
        }
        if let Some(v) = patch.keywords {
            category.keywords = v;
        }
        if let Some(v) = patch.company {
            category.company = v;
        }
        self.persist_categories();
    }

    /// Remove a category by id; unknown ids are ignored.
    pub fn delete_equipment_category(&mut self, id: &str) {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() != before {
            self.persist_categories();
        }
    }

    // ==================== QUERY HELPERS ====================

    /// All requests raised against one piece of equipment.
    pub fn get_equipment_requests(&self, equipment_id: &str) -> Vec<&MaintenanceRequest> {
        self.requests
            .iter()
            .filter(|r| r.equipment_id == equipment_id)
            .collect()
    }

    /// Count of open (non-terminal) requests for one piece of equipment.
    pub fn get_open_requests_count(&self, equipment_id: &str) -> usize {
        self.requests
            .iter()
            .filter(|r| r.equipment_id == equipment_id && policy::is_open(r.status))
            .count()
    }

    /// Look up equipment by id.
    pub fn get_equipment_by_id(&self, id: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.id == id)
    }

    /// Look up a team by its unique name.
    pub fn get_team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    // ==================== PERSISTENCE ====================

    fn persist_equipment(&self) {
        storage::write_json(self.adapter.as_ref(), EQUIPMENT_KEY, &self.equipment);
    }

    fn persist_teams(&self) {
        storage::write_json(self.adapter.as_ref(), TEAMS_KEY, &self.teams);
    }

    fn persist_requests(&self) {
        storage::write_json(self.adapter.as_ref(), REQUESTS_KEY, &self.requests);
    }

    fn persist_work_centers(&self) {
        storage::write_json(self.adapter.as_ref(), WORK_CENTERS_KEY, &self.work_centers);
    }

    fn persist_categories(&self) {
        storage::write_json(self.adapter.as_ref(), CATEGORIES_KEY, &self.categories);
    }
}

/// Load one collection, falling back to (and immediately persisting) its
/// seed when the blob is absent or unreadable.
fn load_or_seed<T, F>(adapter: &dyn StorageAdapter, key: &str, seed: F) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    match storage::read_json(adapter, key)? {
        Some(value) => Ok(value),
        None => {
            tracing::info!("seeding {}", key);
            let value = seed();
            storage::write_json(adapter, key, &value);
            Ok(value)
        }
    }
}
