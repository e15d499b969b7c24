//! Built-in sample dataset written on first run.
//!
//! The relative `createdAt` stamps (now, two days ago, five days ago) keep
//! the dashboard's recent-activity feed populated no matter when the store
//! is first opened; the scheduled dates are fixed.

use chrono::{Duration, NaiveDate, Utc};

use crate::models::{
    Equipment, EquipmentStatus, MaintenanceRequest, MemberStatus, Priority, RequestStatus,
    RequestType, Team, TeamMember,
};

pub fn sample_equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "EQ-001".to_string(),
            name: "Hydraulic Press A1".to_string(),
            serial_number: "HP-A1-2023".to_string(),
            category: "Heating & Cooling".to_string(),
            department: "Production".to_string(),
            employee: Some("John Smith".to_string()),
            location: "Building A, Floor 2".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            warranty_info: "2 years warranty".to_string(),
            maintenance_team: "Mechanics Alpha".to_string(),
            assigned_technician: Some("Sarah Jenkins".to_string()),
            status: EquipmentStatus::Operational,
            image: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuA4GZjPc5V559Brm4tNl4SQfoKt9bSe_6Nk9QSaqtvoMD5tN6azwNu1bMUy7Mmdm1skBphmXfBWifCMbHa_RFBaaHfyCHwILVSSWDXdk7uopYpuIMqd5c2qDKKFIgzd6pJvMxj2rGvKz0Z5d0fX1lqYG1aARAyI4D__XtBxqoMZ9_ihFewnzBYQoDNTOcp4OY0fSAK9Ia0h9mlFt-zvILkOlqDswBl-Go8b6HAnofH8KmFtr2LL_hJ30Ls8a7jleGk--_kP2sii4mk".to_string()),
            scrapped_date: None,
            scrapped_reason: None,
        },
        Equipment {
            id: "EQ-002".to_string(),
            name: "Conveyor Belt 04".to_string(),
            serial_number: "CB-04-2022".to_string(),
            category: "Manufacturing".to_string(),
            department: "Production".to_string(),
            employee: None,
            location: "Warehouse".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 6, 20),
            warranty_info: "1 year warranty".to_string(),
            maintenance_team: "Mechanics Alpha".to_string(),
            assigned_technician: Some("John Doe".to_string()),
            status: EquipmentStatus::Maintenance,
            image: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuA4nP2F3elrvo9zVMBtZfF5-MmRqnsifhDOhPwdO7zgdwDe74ue3DgSlbsVX3CfYW2m1l-c8JfhUWPKOduG_o2LYSCY1YY4oF4G7_JGhndyRpOpPIL-8pnjqu86jt3pFiAFjNxAGOGDUxtkgsay4LHNWs_p82yba7I3VyT6oid9po3J7kkIpIT0uBdFCdc1a4csy2XxXMRa9vwkqjWsCLfCxHb0uCTsaLSVTnymLCgdyegxtr_0D_H3qM0kl3VEvKJx_BLVEUNSQks".to_string()),
            scrapped_date: None,
            scrapped_reason: None,
        },
        Equipment {
            id: "EQ-003".to_string(),
            name: "Forklift Unit 12".to_string(),
            serial_number: "FL-12-2021".to_string(),
            category: "Vehicles".to_string(),
            department: "Logistics".to_string(),
            employee: Some("Mike Johnson".to_string()),
            location: "Loading Dock".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2021, 3, 10),
            warranty_info: "Expired".to_string(),
            maintenance_team: "Mechanics Alpha".to_string(),
            assigned_technician: Some("Sarah Jenkins".to_string()),
            status: EquipmentStatus::Operational,
            image: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuB7LX7uJPfVuLB_FE4wYeoFTr1t1fe1zcNIJ5djJ-MbUTlTKAGoRuuMKg6NCP94sA7ORce89ZuWvhuRXhHUbByDvf3l8ORkXoEqwgU9DyW_Nj4WUw7U_NOG9ChoSs0zU13YnAdZAEz6PA4k1hpA5X-GGiqL9NFcG8uPF_r11FPsg2p6myGco-pv5SItKmJXnGYo7Ow02KBq3x2iJMXc4N4UgxwXoW_jOEOW24IDkvZijYa3aSDExUKz7bC1Gi3e9sVvsooB-P-LVl0".to_string()),
            scrapped_date: None,
            scrapped_reason: None,
        },
        Equipment {
            id: "EQ-004".to_string(),
            name: "HVAC Unit #4".to_string(),
            serial_number: "HVAC-04-2023".to_string(),
            category: "Heating & Cooling".to_string(),
            department: "Facilities".to_string(),
            employee: None,
            location: "Zone B".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 5, 12),
            warranty_info: "3 years warranty".to_string(),
            maintenance_team: "Plumbing & HVAC".to_string(),
            assigned_technician: Some("Marcus Johnson".to_string()),
            status: EquipmentStatus::Operational,
            image: None,
            scrapped_date: None,
            scrapped_reason: None,
        },
    ]
}

pub fn sample_teams() -> Vec<Team> {
    vec![
        Team {
            id: "TEAM-001".to_string(),
            name: "Mechanics Alpha".to_string(),
            specialty: "Heavy Machinery".to_string(),
            team_lead: "Sarah Jenkins".to_string(),
            members: vec![
                TeamMember {
                    id: "TECH-001".to_string(),
                    name: "Sarah Jenkins".to_string(),
                    specialty: "Mechanical".to_string(),
                    status: MemberStatus::Available,
                    avatar: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuDcHlFVSZe7VtDr5j4qK95BbIYp2nObgo7FUk7L_6JtUw-dPdZiTszzzFyfhJvUfP1pmtD5y9oPnTSFnMq23GS1KWlPXwhWZkdEo72GOGDPI5-cezngkzdeVO4qVlZLUyQ5U6D6Eip46hvB5eGKxLhLmNn2vZ35H7FoVqUlKxFjT5UQDDVEpx7rfXosfXuec7gohzpBdFclQETGTc0RE6ic3j6-Sz__Y6RDcqx6uQ5u6Ir5H7-98oOviNqqrw8xo2bZo6zCMpkM2p8".to_string()),
                },
                TeamMember {
                    id: "TECH-002".to_string(),
                    name: "John Doe".to_string(),
                    specialty: "Mechanical".to_string(),
                    status: MemberStatus::Busy,
                    avatar: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuDJ5c4ezVJFu2XaYL5KMkKF8cx8c360SwJJtza0ZN_EZLr2CD9g7x7Nin1CX3_4af310BIvfdpQlL4XrJllGK-vNB_-VAzGYOxEg4DnQ_BD9-GDa8XfP6Muk-4zziC-SgU1wx-PyjSsdLyL5JwQA-v8xnIi0I9fbTzcWwmqW2VbQBbQXBXbmo1ong5sB2zR3UVQIvEeRbWTv--O_xcM-N6ajCTfKYTTwWNP2EJEyz1KuEbVEMPHeQwd3wpblQoEmzqOj_-dTiRiraQ".to_string()),
                },
            ],
        },
        Team {
            id: "TEAM-002".to_string(),
            name: "Electrical Response".to_string(),
            specialty: "High Voltage".to_string(),
            team_lead: "Mike Ross".to_string(),
            members: vec![TeamMember {
                id: "TECH-003".to_string(),
                name: "Mike Ross".to_string(),
                specialty: "Electrical".to_string(),
                status: MemberStatus::Busy,
                avatar: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuDKHb6NjVTA9OXEcfesNjTJN_EGG9tC9qBwDRZcWrO2vUmZC5EzEuU9cacqIE4eSc-L7cv1dHz8I-9bbyvlQIhQhv4ERo6Z8neC8oSgkyxbbiX5-SEa8vquzKN148m9crKIFUr1PhcLf_qkSHn_lcfeCP87jgg5sSqUD86c1C7ZREL7HMUODwRVlvQQkaepgxlG2RZmiMozq2pOexmGYx7Qp1fho-PO_j6UD4sQFWNlkig1Wv54q-1af-lVx33PIyTiZ6tqzF-L_vs".to_string()),
            }],
        },
        Team {
            id: "TEAM-003".to_string(),
            name: "IT Support Unit".to_string(),
            specialty: "Software & Hardware".to_string(),
            team_lead: "David Chen".to_string(),
            members: vec![TeamMember {
                id: "TECH-004".to_string(),
                name: "David Chen".to_string(),
                specialty: "IT".to_string(),
                status: MemberStatus::Available,
                avatar: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuAVtngW_x-ZvA_4Uke0tMjqMRqZ4QeMCBfhtMpCfU8jmie0zVBRQRCxIVfQqwh_Evo8iyyPuU4_tWTXzfuZF123KHjCz2iejer45ALtgcZyQBpZz1e8l4LhQEdalYuOssm7aUQAsPw01n4U8hzEgHUYBGNe8VMQzYTctOnF49_uBw_8nC2voU8pqCVPzawSESR2r1x7WWbFmg9LwV3NQOk7Ite7NEXhdVu3Vsb7DUIOLuTj_iWXqjXPaNMU4UQqtAzcen5B9NzV9D8".to_string()),
            }],
        },
        Team {
            id: "TEAM-004".to_string(),
            name: "Plumbing & HVAC".to_string(),
            specialty: "Facility Maintenance".to_string(),
            team_lead: "Marcus Johnson".to_string(),
            members: vec![TeamMember {
                id: "TECH-005".to_string(),
                name: "Marcus Johnson".to_string(),
                specialty: "HVAC".to_string(),
                status: MemberStatus::Available,
                avatar: Some("https://lh3.googleusercontent.com/aida-public/AB6AXuAzqVaptmazPiUlwjFZO3cVnaEuVhJd46U2bIf2E4GR_AdSO7zIzJirOTWzDpcgZLrbZP9TflzKhSeJSVw6DXZIgpXQD3b4zjvqortZFTE2TLTudlxhHsCsQdJzWHCmtVgENck27fvQ4822V38jpAo_iQzwqK4LdyBUDP4pQ-_qtwsxdvWSKfxK5RuUiH_qKeOjlBlO2OhFWp00UL-fJWGojh3YME5BNCJEYmQnLm_Is-X6QF-Ea6mu27Zxzoej5LisJfO4LUp11Ps".to_string()),
            }],
        },
    ]
}

pub fn sample_requests() -> Vec<MaintenanceRequest> {
    let now = Utc::now();
    vec![
        MaintenanceRequest {
            id: "REQ-2024".to_string(),
            ticket_id: "#REQ-2024".to_string(),
            subject: "Fluid Leakage".to_string(),
            equipment_id: "EQ-001".to_string(),
            equipment_name: "Hydraulic Press A1".to_string(),
            request_type: RequestType::Corrective,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 10, 24),
            duration: None,
            hours_spent: None,
            priority: Priority::High,
            status: RequestStatus::New,
            assigned_team: Some("Mechanics Alpha".to_string()),
            assigned_technician: None,
            description: "Leaking oil from hydraulic system".to_string(),
            created_at: now,
            overdue: false,
        },
        MaintenanceRequest {
            id: "REQ-2023".to_string(),
            ticket_id: "#REQ-2023".to_string(),
            subject: "Motor Overheat".to_string(),
            equipment_id: "EQ-002".to_string(),
            equipment_name: "Conveyor Belt 04".to_string(),
            request_type: RequestType::Corrective,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 10, 23),
            duration: None,
            hours_spent: None,
            priority: Priority::Medium,
            status: RequestStatus::InProgress,
            assigned_team: Some("Mechanics Alpha".to_string()),
            assigned_technician: Some("John Doe".to_string()),
            description: "Motor overheating during peak load".to_string(),
            created_at: now - Duration::days(2),
            overdue: true,
        },
        MaintenanceRequest {
            id: "REQ-2022".to_string(),
            ticket_id: "#REQ-2022".to_string(),
            subject: "Tire Replacement".to_string(),
            equipment_id: "EQ-003".to_string(),
            equipment_name: "Forklift Unit 12".to_string(),
            request_type: RequestType::Corrective,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 10, 25),
            duration: None,
            hours_spent: None,
            priority: Priority::Low,
            status: RequestStatus::New,
            assigned_team: Some("Mechanics Alpha".to_string()),
            assigned_technician: None,
            description: "Tire replacement required".to_string(),
            created_at: now,
            overdue: false,
        },
        MaintenanceRequest {
            id: "REQ-1024".to_string(),
            ticket_id: "#REQ-1024".to_string(),
            subject: "Fan failure reported".to_string(),
            equipment_id: "EQ-004".to_string(),
            equipment_name: "HVAC Unit #4".to_string(),
            request_type: RequestType::Corrective,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 10, 25),
            duration: None,
            hours_spent: None,
            priority: Priority::Medium,
            status: RequestStatus::New,
            assigned_team: Some("Plumbing & HVAC".to_string()),
            assigned_technician: None,
            description: "Fan failure reported in Zone B. Makes loud rattling noise.".to_string(),
            created_at: now,
            overdue: false,
        },
        // equipmentName is intentionally stale here: the snapshot survives
        // even though EQ-004 is named "HVAC Unit #4".
        MaintenanceRequest {
            id: "REQ-1005".to_string(),
            ticket_id: "#REQ-1005".to_string(),
            subject: "Filter replacement".to_string(),
            equipment_id: "EQ-004".to_string(),
            equipment_name: "Server Room AC".to_string(),
            request_type: RequestType::Preventive,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 10, 22),
            duration: Some(2.0),
            hours_spent: Some(2.0),
            priority: Priority::Low,
            status: RequestStatus::Repaired,
            assigned_team: Some("Plumbing & HVAC".to_string()),
            assigned_technician: Some("Marcus Johnson".to_string()),
            description: "Filter replacement and coil cleaning".to_string(),
            created_at: now - Duration::days(5),
            overdue: false,
        },
    ]
}
