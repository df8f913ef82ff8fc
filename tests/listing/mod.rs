mod filter_paginate;
mod listing_state;
