mod dialects;
mod events_bad;
