mod waypoint;
