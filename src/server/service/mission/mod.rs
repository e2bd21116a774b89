//! Mission workflow service.
//!
//! Two ingestion paths feed a drone's mission: uploading a waypoint file, which is saved
//! to the mission-file store before it is parsed, and loading a file already in the
//! store. Both parse the file and hand the result to [`MissionStore::replace`]; a parse
//! failure leaves the stored mission untouched.

pub mod store;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        drone::DroneRepository,
        mission_file::{MissionFileStore, WAYPOINT_EXTENSION},
    },
    error::{not_found::NotFoundError, AppError},
    model::waypoint::{
        mission_distance, FlightDistance, MissionFile, MissionLoad, MissionStatistics, Waypoint,
    },
    util::{
        lock::DroneLocks,
        qgc::{self, ParseMode},
    },
};

use self::store::MissionStore;

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a DroneLocks,
    files: &'a MissionFileStore,
    parse_mode: ParseMode,
}

impl<'a> MissionService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a DroneLocks,
        files: &'a MissionFileStore,
        parse_mode: ParseMode,
    ) -> Self {
        Self {
            db,
            locks,
            files,
            parse_mode,
        }
    }

    /// Saves an uploaded waypoint file and makes it the drone's mission.
    ///
    /// The file is written under `filename` before parsing, replacing any file of the
    /// same name, so a rejected upload can still be inspected.
    ///
    /// # Arguments
    /// - `drone_id` - Drone receiving the mission
    /// - `filename` - Name to store the file under
    /// - `content` - File body; `None` or empty means the upload did not arrive
    ///
    /// # Returns
    /// - `Ok(MissionLoad)` - Stored mission with version and path length
    /// - `Err(AppError::Upload)` - No content received
    /// - `Err(AppError::ValidationErr)` - File name escapes the store
    /// - `Err(AppError::NotFoundErr)` - Drone does not exist
    /// - `Err(AppError::FormatErr)` - File rejected by the parser
    /// - `Err(AppError::IoErr | AppError::DbErr)` - Storage failure
    pub async fn upload(
        &self,
        drone_id: i32,
        filename: &str,
        content: Option<&[u8]>,
    ) -> Result<MissionLoad, AppError> {
        let content = match content {
            Some(content) if !content.is_empty() => content,
            _ => {
                tracing::warn!("Rejected empty waypoint upload for drone {}", drone_id);
                return Err(AppError::Upload("No waypoint file uploaded".to_string()));
            }
        };

        MissionFileStore::validate_file_name(filename)?;
        self.require_drone(drone_id).await?;

        if self.files.exists(filename).await? {
            tracing::info!("Overwriting mission file {}", filename);
        }
        self.files.write(filename, content).await?;

        self.ingest(drone_id, filename, content).await
    }

    /// Makes an existing file in the mission-file store the drone's mission.
    ///
    /// # Returns
    /// - `Ok(MissionLoad)` - Stored mission with version and path length
    /// - `Err(AppError::ValidationErr)` - Invalid file name
    /// - `Err(AppError::NotFoundErr)` - File or drone does not exist
    /// - `Err(AppError::FormatErr)` - File rejected by the parser
    /// - `Err(AppError::IoErr | AppError::DbErr)` - Storage failure
    pub async fn load(&self, drone_id: i32, filename: &str) -> Result<MissionLoad, AppError> {
        let content = self
            .files
            .read(filename)
            .await?
            .ok_or_else(|| NotFoundError::MissionFile(filename.to_string()))?;

        self.ingest(drone_id, filename, &content).await
    }

    /// Removes the drone's mission.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of waypoints removed
    /// - `Err(AppError::NotFoundErr)` - Drone does not exist
    pub async fn clear(&self, drone_id: i32) -> Result<u64, AppError> {
        self.store().clear(drone_id).await
    }

    /// Gets the drone's mission in sequence order.
    ///
    /// # Returns
    /// - `Ok(Vec<Waypoint>)` - Current mission, possibly empty
    /// - `Err(AppError::NotFoundErr)` - Drone does not exist
    pub async fn list(&self, drone_id: i32) -> Result<Vec<Waypoint>, AppError> {
        self.require_drone(drone_id).await?;

        self.store().list(drone_id).await
    }

    /// Summarizes the drone's mission per source file.
    pub async fn statistics(&self, drone_id: i32) -> Result<MissionStatistics, AppError> {
        let waypoints = self.list(drone_id).await?;

        Ok(MissionStatistics::from_waypoints(drone_id, &waypoints))
    }

    /// Computes the horizontal path length of the drone's mission.
    pub async fn flight_distance(&self, drone_id: i32) -> Result<FlightDistance, AppError> {
        let waypoints = self.list(drone_id).await?;

        Ok(FlightDistance {
            drone_id,
            waypoint_count: waypoints.len(),
            total_distance: mission_distance(&waypoints),
        })
    }

    /// Lists waypoint files available for loading, sorted by name.
    pub async fn available_files(&self) -> Result<Vec<MissionFile>, AppError> {
        self.files.list(WAYPOINT_EXTENSION).await
    }

    async fn ingest(
        &self,
        drone_id: i32,
        filename: &str,
        content: &[u8],
    ) -> Result<MissionLoad, AppError> {
        let parsed = qgc::parse_waypoint_file(content, drone_id, filename, self.parse_mode)
            .inspect_err(|err| {
                tracing::warn!(
                    "Rejected waypoint file {} for drone {}: {}",
                    filename,
                    drone_id,
                    err
                )
            })?;

        if parsed.skipped_lines > 0 {
            tracing::warn!(
                "Skipped {} malformed lines in {} for drone {}",
                parsed.skipped_lines,
                filename,
                drone_id
            );
        }

        let waypoints = self.store().replace(drone_id, parsed.waypoints).await?;

        Ok(MissionLoad {
            drone_id,
            filename: filename.to_string(),
            format_version: parsed.format_version,
            total_distance: mission_distance(&waypoints),
            waypoints,
        })
    }

    async fn require_drone(&self, drone_id: i32) -> Result<(), AppError> {
        if !DroneRepository::new(self.db).exists(drone_id).await? {
            return Err(NotFoundError::Drone(drone_id).into());
        }

        Ok(())
    }

    fn store(&self) -> MissionStore<'a> {
        MissionStore::new(self.db, self.locks)
    }
}
